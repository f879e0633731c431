use iced::Vector;

/// Saturating clamp. Never rejects a sample, only pins it to the range.
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// Clamped offset of the badge from its resting position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Displacement {
    pub x: f32,
    pub y: f32,
}

impl Displacement {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Clamps each axis independently to `[-limit, limit]`.
    pub fn clamped(raw: Vector, limit: f32) -> Self {
        Self {
            x: clamp(raw.x, -limit, limit),
            y: clamp(raw.y, -limit, limit),
        }
    }

    pub fn scale(self, factor: f32) -> Vector {
        Vector::new(self.x * factor, self.y * factor)
    }
}

impl From<Displacement> for Vector {
    fn from(displacement: Displacement) -> Self {
        Vector::new(displacement.x, displacement.y)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging,
}

#[derive(Clone, Debug)]
pub struct DragTracker {
    limit: f32,
    phase: DragPhase,
    displacement: Displacement,
}

impl DragTracker {
    pub fn new(limit: f32) -> Self {
        Self {
            limit,
            phase: DragPhase::Idle,
            displacement: Displacement::ZERO,
        }
    }

    #[inline]
    pub fn limit(&self) -> f32 {
        self.limit
    }

    #[inline]
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    #[inline]
    pub fn displacement(&self) -> Displacement {
        self.displacement
    }

    /// Returns false if a gesture is already in progress.
    pub fn begin(&mut self) -> bool {
        if self.phase() == DragPhase::Dragging {
            log::warn!("Drag started while another drag is active, ignoring");
            return false;
        }
        self.phase = DragPhase::Dragging;
        true
    }

    pub fn track(&mut self, raw: Vector) {
        if self.phase() != DragPhase::Dragging {
            log::warn!("Dropping drag sample ({}, {}) outside of a gesture", raw.x, raw.y);
            return;
        }
        self.displacement = Displacement::clamped(raw, self.limit);
        log::trace!("Drag sample ({}, {}) -> {:?}", raw.x, raw.y, self.displacement);
    }

    /// Finishes the gesture and yields the final clamped displacement, once.
    pub fn end(&mut self) -> Option<Displacement> {
        if self.phase() != DragPhase::Dragging {
            log::warn!("Drag ended without an active gesture, ignoring");
            return None;
        }
        self.phase = DragPhase::Idle;
        Some(self.displacement)
    }

    /// Overwrites the displacement outside of a drag, used by the spring-back.
    pub fn settle_to(&mut self, displacement: Displacement) {
        self.displacement = displacement;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use rand::Rng;

    fn limit() -> f32 {
        Settings::default().max_slide_offset()
    }

    #[test]
    fn test_clamp_saturates() {
        assert_eq!(clamp(100.0, -limit(), limit()), limit());
        assert_eq!(clamp(-100.0, -limit(), limit()), -limit());
        assert_eq!(clamp(12.5, -limit(), limit()), 12.5);
        assert_eq!(clamp(f32::INFINITY, -limit(), limit()), limit());
        assert_eq!(clamp(f32::NEG_INFINITY, -limit(), limit()), -limit());
    }

    #[test]
    fn test_clamped_stays_in_bounds_and_is_idempotent() {
        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let raw = Vector::new(rng.gen_range(-500.0..500.0), rng.gen_range(-500.0..500.0));
            let once = Displacement::clamped(raw, limit());
            assert!((-limit()..=limit()).contains(&once.x), "x out of bounds: {:?}", once);
            assert!((-limit()..=limit()).contains(&once.y), "y out of bounds: {:?}", once);
            assert_eq!(Displacement::clamped(once.into(), limit()), once);
        }
    }

    #[test]
    fn test_tracker_clamps_samples_in_order() {
        let mut tracker = DragTracker::new(limit());
        assert!(tracker.begin());
        tracker.track(Vector::new(10.0, -5.0));
        assert_eq!(tracker.displacement(), Displacement::new(10.0, -5.0));
        tracker.track(Vector::new(80.0, -300.0));
        assert_eq!(tracker.displacement(), Displacement::new(limit(), -limit()));
        assert_eq!(tracker.end(), Some(Displacement::new(limit(), -limit())));
        assert_eq!(tracker.phase(), DragPhase::Idle);
    }

    #[test]
    fn test_end_fires_once_per_gesture() {
        let mut tracker = DragTracker::new(limit());
        tracker.begin();
        tracker.track(Vector::new(1.0, 1.0));
        assert!(tracker.end().is_some());
        assert!(tracker.end().is_none());
    }

    #[test]
    fn test_rejects_out_of_order_events() {
        let mut tracker = DragTracker::new(limit());
        tracker.track(Vector::new(30.0, 0.0));
        assert_eq!(tracker.displacement(), Displacement::ZERO);

        assert!(tracker.begin());
        assert!(!tracker.begin());
        assert_eq!(tracker.phase(), DragPhase::Dragging);
    }
}
