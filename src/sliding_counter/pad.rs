//! Canvas program for the sliding counter: recognizes pan gestures on the
//! badge and draws the button from the current displacement.

use iced::{
    Color, Point, Rectangle, Renderer, Size, Theme, Vector, alignment, mouse, touch,
    widget::canvas::{self, Frame, Geometry, LineCap, Path, Stroke, event},
};

use super::{
    drag::Displacement,
    feedback::{IconOpacity, badge_offset, parallax_offset},
    message::{AppMessage, GestureEvent},
};
use crate::settings::Settings;

// #101010
const BUTTON_COLOR: Color = Color {
    r: 16.0 / 255.0,
    g: 16.0 / 255.0,
    b: 16.0 / 255.0,
    a: 1.0,
};
// #225252
const BADGE_COLOR: Color = Color {
    r: 34.0 / 255.0,
    g: 82.0 / 255.0,
    b: 82.0 / 255.0,
    a: 1.0,
};
const COUNTER_TEXT_SIZE: f32 = 25.0;
const ICON_STROKE: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pointer {
    Mouse,
    Finger(touch::Finger),
}

/// The pointer driving the current gesture and where it went down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grip {
    pointer: Pointer,
    origin: Point,
}

#[derive(Debug, Clone, Copy)]
pub struct Pad {
    pub value: i64,
    pub displacement: Displacement,
    pub settings: Settings,
}

impl Pad {
    fn badge_center(&self, size: Size) -> Point {
        Point::new(size.width / 2.0, size.height / 2.0)
            + badge_offset(self.displacement, self.settings.parallax)
    }

    /// `local` is relative to the canvas' top-left corner.
    pub fn hits_badge(&self, local: Point, size: Size) -> bool {
        local.distance(self.badge_center(size)) <= self.settings.badge_radius()
    }

    fn press(
        &self,
        grip: &mut Option<Grip>,
        pointer: Pointer,
        position: Point,
        bounds: Rectangle,
    ) -> (event::Status, Option<AppMessage>) {
        if grip.is_some() {
            return (event::Status::Ignored, None);
        }
        let local = Point::new(position.x - bounds.x, position.y - bounds.y);
        if !self.hits_badge(local, bounds.size()) {
            return (event::Status::Ignored, None);
        }
        *grip = Some(Grip {
            pointer,
            origin: position,
        });
        (
            event::Status::Captured,
            Some(AppMessage::Gesture(GestureEvent::Started)),
        )
    }

    fn drag(
        grip: &Option<Grip>,
        pointer: Pointer,
        position: Point,
    ) -> (event::Status, Option<AppMessage>) {
        match grip {
            Some(grip) if grip.pointer == pointer => (
                event::Status::Captured,
                Some(AppMessage::Gesture(GestureEvent::Moved(position - grip.origin))),
            ),
            _ => (event::Status::Ignored, None),
        }
    }

    fn release(grip: &mut Option<Grip>, pointer: Pointer) -> (event::Status, Option<AppMessage>) {
        match grip {
            Some(active) if active.pointer == pointer => {
                *grip = None;
                (
                    event::Status::Captured,
                    Some(AppMessage::Gesture(GestureEvent::Ended)),
                )
            }
            _ => (event::Status::Ignored, None),
        }
    }

    fn draw_icons(&self, frame: &mut Frame, button_center: Point) {
        let opacity = IconOpacity::at(self.displacement, self.settings.max_slide_offset());
        let icon = self.settings.icon_size;
        let width = self.settings.button_width;
        let gap = (width - 3.0 * icon) / 4.0;
        let first = button_center.x - width / 2.0 + gap + icon / 2.0;
        let y = button_center.y;
        let arm = icon * 0.35;

        let stroke = |alpha: f32| {
            Stroke::default()
                .with_width(ICON_STROKE)
                .with_line_cap(LineCap::Round)
                .with_color(Color {
                    a: alpha,
                    ..Color::WHITE
                })
        };

        let minus = Point::new(first, y);
        frame.stroke(
            &Path::line(minus - Vector::new(arm, 0.0), minus + Vector::new(arm, 0.0)),
            stroke(opacity.plus_minus),
        );

        let close = Point::new(first + gap + icon, y);
        let cross = Path::new(|b| {
            b.move_to(close - Vector::new(arm, arm));
            b.line_to(close + Vector::new(arm, arm));
            b.move_to(close + Vector::new(-arm, arm));
            b.line_to(close + Vector::new(arm, -arm));
        });
        frame.stroke(&cross, stroke(opacity.close));

        let plus = Point::new(first + 2.0 * (gap + icon), y);
        let plus_path = Path::new(|b| {
            b.move_to(plus - Vector::new(arm, 0.0));
            b.line_to(plus + Vector::new(arm, 0.0));
            b.move_to(plus - Vector::new(0.0, arm));
            b.line_to(plus + Vector::new(0.0, arm));
        });
        frame.stroke(&plus_path, stroke(opacity.plus_minus));
    }
}

impl canvas::Program<AppMessage> for Pad {
    type State = Option<Grip>;

    fn update(
        &self,
        grip: &mut Self::State,
        event: canvas::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> (event::Status, Option<AppMessage>) {
        match event {
            canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                match cursor.position() {
                    Some(position) => self.press(grip, Pointer::Mouse, position, bounds),
                    None => (event::Status::Ignored, None),
                }
            }
            canvas::Event::Mouse(mouse::Event::CursorMoved { position }) => {
                Self::drag(grip, Pointer::Mouse, position)
            }
            canvas::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                Self::release(grip, Pointer::Mouse)
            }
            canvas::Event::Touch(touch::Event::FingerPressed { id, position }) => {
                self.press(grip, Pointer::Finger(id), position, bounds)
            }
            canvas::Event::Touch(touch::Event::FingerMoved { id, position }) => {
                Self::drag(grip, Pointer::Finger(id), position)
            }
            canvas::Event::Touch(
                touch::Event::FingerLifted { id, .. } | touch::Event::FingerLost { id, .. },
            ) => Self::release(grip, Pointer::Finger(id)),
            _ => (event::Status::Ignored, None),
        }
    }

    fn draw(
        &self,
        _grip: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let settings = &self.settings;

        let button_center =
            frame.center() + parallax_offset(self.displacement, settings.parallax);
        let button_size = Size::new(settings.button_width, settings.button_height);
        let top_left = button_center - Vector::new(button_size.width / 2.0, button_size.height / 2.0);
        frame.fill(
            &Path::rounded_rectangle(top_left, button_size, (button_size.height / 2.0).into()),
            BUTTON_COLOR,
        );

        self.draw_icons(&mut frame, button_center);

        let badge_center = self.badge_center(bounds.size());
        frame.fill(&Path::circle(badge_center, settings.badge_radius()), BADGE_COLOR);
        frame.fill_text(canvas::Text {
            content: self.value.to_string(),
            position: badge_center,
            color: Color::WHITE,
            size: COUNTER_TEXT_SIZE.into(),
            horizontal_alignment: alignment::Horizontal::Center,
            vertical_alignment: alignment::Vertical::Center,
            ..canvas::Text::default()
        });

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        grip: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if grip.is_some() {
            return mouse::Interaction::Grabbing;
        }
        match cursor.position_in(bounds) {
            Some(local) if self.hits_badge(local, bounds.size()) => mouse::Interaction::Grab,
            _ => mouse::Interaction::default(),
        }
    }
}
