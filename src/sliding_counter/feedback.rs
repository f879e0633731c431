//! Pure mappings from the current displacement to what the widget draws.

use iced::Vector;

use super::drag::Displacement;

/// Piecewise-linear interpolation over ascending `input` breakpoints.
/// Values outside the breakpoints hold the nearest endpoint's output.
pub fn interpolate(value: f32, input: &[f32], output: &[f32]) -> f32 {
    debug_assert_eq!(input.len(), output.len());
    debug_assert!(input.len() >= 2);

    let last = input.len() - 1;
    if value <= input[0] {
        return output[0];
    }
    if value >= input[last] {
        return output[last];
    }

    let segment = input
        .windows(2)
        .position(|pair| value <= pair[1])
        .unwrap_or(last - 1);
    let (from, to) = (input[segment], input[segment + 1]);
    let span = to - from;
    if span == 0.0 {
        return output[segment + 1];
    }
    let progress = (value - from) / span;
    output[segment] + (output[segment + 1] - output[segment]) * progress
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IconOpacity {
    pub plus_minus: f32,
    pub close: f32,
}

impl IconOpacity {
    pub fn at(displacement: Displacement, limit: f32) -> Self {
        let across = interpolate(displacement.x, &[-limit, 0.0, limit], &[0.1, 0.8, 0.1]);
        let down = interpolate(displacement.y, &[0.0, limit], &[1.0, 0.0]);
        let close = interpolate(displacement.y, &[0.0, limit], &[0.0, 0.8]);
        Self {
            plus_minus: across * down,
            close,
        }
    }
}

/// Offset of the whole button.
pub fn parallax_offset(displacement: Displacement, parallax: f32) -> Vector {
    displacement.scale(parallax)
}

/// Offset of the badge; it rides on the button.
pub fn badge_offset(displacement: Displacement, parallax: f32) -> Vector {
    parallax_offset(displacement, parallax) + Vector::from(displacement)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    fn limit() -> f32 {
        Settings::default().max_slide_offset()
    }

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-5,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_interpolate_between_and_beyond_breakpoints() {
        let input = [-limit(), 0.0, limit()];
        let output = [0.1, 0.8, 0.1];
        assert_close(interpolate(0.0, &input, &output), 0.8);
        assert_close(interpolate(-limit() / 2.0, &input, &output), 0.45);
        assert_close(interpolate(limit() / 2.0, &input, &output), 0.45);
        assert_close(interpolate(-1000.0, &input, &output), 0.1);
        assert_close(interpolate(1000.0, &input, &output), 0.1);
    }

    #[test]
    fn test_opacity_at_rest() {
        let opacity = IconOpacity::at(Displacement::ZERO, limit());
        assert_close(opacity.plus_minus, 0.8);
        assert_close(opacity.close, 0.0);
    }

    #[test]
    fn test_opacity_at_horizontal_bound() {
        let opacity = IconOpacity::at(Displacement::new(limit(), 0.0), limit());
        assert_close(opacity.plus_minus, 0.1);
        assert_close(opacity.close, 0.0);
    }

    #[test]
    fn test_opacity_at_vertical_bound() {
        let opacity = IconOpacity::at(Displacement::new(0.0, limit()), limit());
        assert_close(opacity.plus_minus, 0.0);
        assert_close(opacity.close, 0.8);
    }

    #[test]
    fn test_upward_drag_does_not_show_close() {
        let opacity = IconOpacity::at(Displacement::new(0.0, -limit()), limit());
        assert_close(opacity.close, 0.0);
        assert_close(opacity.plus_minus, 0.8);
    }

    #[test]
    fn test_badge_rides_on_parallax() {
        let displacement = Displacement::new(limit(), -20.0);
        let button = parallax_offset(displacement, 0.1);
        let badge = badge_offset(displacement, 0.1);
        assert_close(button.x, 5.4);
        assert_close(button.y, -2.0);
        assert_close(badge.x, 59.4);
        assert_close(badge.y, -22.0);
    }
}
