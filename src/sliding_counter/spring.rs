use std::time::Instant;

use super::drag::Displacement;

// Keep integration stable when frames arrive late
const MAX_STEP_SECS: f32 = 1.0 / 120.0;
const MAX_FRAME_SECS: f32 = 0.1;

/// Configuration for the spring-back physics
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub mass: f32,
    pub stiffness: f32,
    pub damping: f32,
    /// Distance from rest, in pixels, under which the spring may settle.
    pub rest_displacement: f32,
    /// Speed, in pixels per second, under which the spring may settle.
    pub rest_speed: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            mass: 1.0,
            stiffness: 100.0,
            damping: 10.0,
            rest_displacement: 0.01,
            rest_speed: 2.0,
        }
    }
}

/// One axis of a spring pulling towards zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringAxis {
    pub position: f32,
    pub velocity: f32,
}

impl SpringAxis {
    pub fn released_at(position: f32) -> Self {
        Self {
            position,
            velocity: 0.0,
        }
    }

    /// Advances the simulation by `dt` seconds using semi-implicit Euler.
    pub fn step(&mut self, dt: f32, config: &SpringConfig) {
        let mut remaining = dt.clamp(0.0, MAX_FRAME_SECS);
        while remaining > f32::EPSILON {
            let slice = remaining.min(MAX_STEP_SECS);
            remaining -= slice;

            // F = -k * x - c * v
            let force = -config.stiffness * self.position - config.damping * self.velocity;
            let acceleration = force / config.mass;
            self.velocity += acceleration * slice;
            self.position += self.velocity * slice;
        }
    }

    pub fn is_settled(&self, config: &SpringConfig) -> bool {
        self.position.abs() < config.rest_displacement && self.velocity.abs() < config.rest_speed
    }
}

/// Returns a released displacement to the origin.
#[derive(Clone, Debug)]
pub struct SpringBack {
    x: SpringAxis,
    y: SpringAxis,
    config: SpringConfig,
    last_tick: Option<Instant>,
}

impl SpringBack {
    pub fn new(from: Displacement, config: SpringConfig) -> Self {
        Self {
            x: SpringAxis::released_at(from.x),
            y: SpringAxis::released_at(from.y),
            config,
            last_tick: None,
        }
    }

    pub fn displacement(&self) -> Displacement {
        Displacement::new(self.x.position, self.y.position)
    }

    pub fn is_settled(&self) -> bool {
        self.x.is_settled(&self.config) && self.y.is_settled(&self.config)
    }

    /// Steps both axes to `now`. The first tick only anchors the clock.
    pub fn advance(&mut self, now: Instant) -> Displacement {
        if let Some(last) = self.last_tick {
            let dt = now.saturating_duration_since(last).as_secs_f32();
            self.x.step(dt, &self.config);
            self.y.step(dt, &self.config);
        }
        self.last_tick = Some(now);

        if self.is_settled() {
            self.x = SpringAxis::released_at(0.0);
            self.y = SpringAxis::released_at(0.0);
        }
        self.displacement()
    }
}
