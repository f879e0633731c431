use std::time::Duration;

use iced::Size;
use once_cell::sync::Lazy;

use crate::sliding_counter::spring::SpringConfig;

const FPS_VAR: &str = "SLIDING_COUNTER_FPS";
const DEFAULT_FPS: u64 = 60;
const MAX_FPS: u64 = 240;
// Badge travel in tenths of the button width; 0.3 is not exact in f32
const SLIDE_TENTHS: f32 = 3.0;

// Loaded once on first access
pub static SETTINGS: Lazy<Settings> = Lazy::new(Settings::from_env);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Settings {
    pub button_width: f32,
    pub button_height: f32,
    pub badge_diameter: f32,
    pub icon_size: f32,
    /// Fraction of the displacement applied to the whole button.
    pub parallax: f32,
    pub spring: SpringConfig,
    pub fps: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            button_width: 180.0,
            button_height: 70.0,
            badge_diameter: 50.0,
            icon_size: 20.0,
            parallax: 0.1,
            spring: SpringConfig::default(),
            fps: DEFAULT_FPS,
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        let mut settings = Self::default();
        if let Ok(raw) = std::env::var(FPS_VAR) {
            match parse_fps(&raw) {
                Some(fps) => settings.fps = fps,
                None => log::warn!(
                    "Ignoring {}={:?}, expected an integer in 1..={}",
                    FPS_VAR,
                    raw,
                    MAX_FPS
                ),
            }
        }
        settings
    }

    /// The clamp boundary `L`.
    #[inline]
    pub fn max_slide_offset(&self) -> f32 {
        self.button_width * SLIDE_TENTHS / 10.0
    }

    #[inline]
    pub fn badge_radius(&self) -> f32 {
        self.badge_diameter / 2.0
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(1000 / self.fps.max(1))
    }

    /// Room for the button plus the badge at full travel, including parallax.
    pub fn canvas_size(&self) -> Size {
        let limit = self.max_slide_offset();
        let reach = 2.0 * (limit + self.badge_radius());
        let drift = 2.0 * limit * self.parallax;
        Size::new(
            self.button_width.max(reach) + drift,
            self.button_height.max(reach) + drift,
        )
    }
}

fn parse_fps(raw: &str) -> Option<u64> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|fps| (1..=MAX_FPS).contains(fps))
}
