use std::time::Instant;

use iced::Vector;

/// Pan gesture as seen by the reducer. Translations are relative to the point
/// where the gesture started, in screen space (+y is down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    Started,
    Moved(Vector),
    Ended,
}

#[derive(Debug, Clone)]
pub enum AppMessage {
    Gesture(GestureEvent),
    Tick(Instant),
}
