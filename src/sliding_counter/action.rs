use super::drag::Displacement;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Increment,
    Decrement,
    Reset,
    IncrementMore,
}

impl Action {
    /// Picks the action for a released drag. Only a displacement pinned to the
    /// clamp boundary triggers; x is checked before y.
    pub fn on_release(displacement: Displacement, limit: f32) -> Option<Self> {
        if displacement.x == limit {
            Some(Self::Increment)
        } else if displacement.x == -limit {
            Some(Self::Decrement)
        } else if displacement.y == limit {
            Some(Self::Reset)
        } else if displacement.y == -limit {
            Some(Self::IncrementMore)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    fn limit() -> f32 {
        Settings::default().max_slide_offset()
    }

    #[test]
    fn test_each_boundary_maps_to_its_action() {
        let cases = [
            (Displacement::new(limit(), 0.0), Action::Increment),
            (Displacement::new(-limit(), 0.0), Action::Decrement),
            (Displacement::new(0.0, limit()), Action::Reset),
            (Displacement::new(0.0, -limit()), Action::IncrementMore),
        ];
        for (displacement, expected) in cases {
            assert_eq!(Action::on_release(displacement, limit()), Some(expected));
        }
    }

    #[test]
    fn test_short_drags_do_nothing() {
        assert_eq!(Action::on_release(Displacement::ZERO, limit()), None);
        assert_eq!(Action::on_release(Displacement::new(53.9, -53.9), limit()), None);
        assert_eq!(Action::on_release(Displacement::new(-20.0, 40.0), limit()), None);
    }

    #[test]
    fn test_x_axis_wins_on_diagonal() {
        assert_eq!(
            Action::on_release(Displacement::new(limit(), limit()), limit()),
            Some(Action::Increment)
        );
        assert_eq!(
            Action::on_release(Displacement::new(-limit(), -limit()), limit()),
            Some(Action::Decrement)
        );
        assert_eq!(
            Action::on_release(Displacement::new(10.0, -limit()), limit()),
            Some(Action::IncrementMore)
        );
    }
}
