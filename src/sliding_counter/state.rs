use iced::{
    Element, Length, Subscription, Task,
    widget::{Canvas, Container},
};

use super::{
    action::Action,
    counter::Counter,
    drag::{Displacement, DragTracker},
    message::{AppMessage, GestureEvent},
    pad::Pad,
    spring::SpringBack,
};
use crate::settings::{SETTINGS, Settings};

/// Owns the counter and the drag state; every gesture and animation frame
/// passes through `update` in arrival order.
pub struct SlidingCounter {
    settings: Settings,
    counter: Counter,
    drag: DragTracker,
    spring_back: Option<SpringBack>,
}

impl SlidingCounter {
    pub fn new() -> (Self, Task<AppMessage>) {
        (Self::with_settings(*SETTINGS), Task::none())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            counter: Counter::default(),
            drag: DragTracker::new(settings.max_slide_offset()),
            spring_back: None,
            settings,
        }
    }

    #[inline]
    pub fn value(&self) -> i64 {
        self.counter.value()
    }

    #[inline]
    pub fn displacement(&self) -> Displacement {
        self.drag.displacement()
    }

    #[cfg(test)]
    pub fn is_dragging(&self) -> bool {
        self.drag.phase() == super::drag::DragPhase::Dragging
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.spring_back.is_some()
    }

    pub fn update(&mut self, message: AppMessage) {
        match message {
            AppMessage::Gesture(event) => {
                self.on_gesture(event);
            }
            AppMessage::Tick(now) => self.on_tick(now),
        }
    }

    /// Returns the action applied by this event, if any.
    fn on_gesture(&mut self, event: GestureEvent) -> Option<Action> {
        match event {
            GestureEvent::Started => {
                if self.drag.begin() {
                    if self.spring_back.take().is_some() {
                        log::debug!("Drag interrupted spring-back at {:?}", self.displacement());
                    }
                    log::debug!("Drag started");
                }
                None
            }
            GestureEvent::Moved(translation) => {
                self.drag.track(translation);
                None
            }
            GestureEvent::Ended => {
                let released = self.drag.end()?;
                let action = Action::on_release(released, self.drag.limit());
                match action {
                    Some(action) => {
                        self.counter.apply(action);
                        log::info!("{:?} applied, counter is now {}", action, self.value());
                    }
                    None => log::debug!("Drag released at {:?} without action", released),
                }
                self.spring_back = Some(SpringBack::new(released, self.settings.spring));
                action
            }
        }
    }

    fn on_tick(&mut self, now: std::time::Instant) {
        let Some(spring_back) = self.spring_back.as_mut() else {
            return;
        };
        let displacement = spring_back.advance(now);
        self.drag.settle_to(displacement);
        if spring_back.is_settled() {
            self.spring_back = None;
            log::debug!("Spring-back settled");
        }
    }

    pub fn subscription(&self) -> Subscription<AppMessage> {
        if self.is_animating() {
            iced::time::every(self.settings.frame_interval()).map(AppMessage::Tick)
        } else {
            Subscription::none()
        }
    }

    pub fn view(&self) -> Element<'_, AppMessage> {
        let size = self.settings.canvas_size();
        let pad = Canvas::new(Pad {
            value: self.value(),
            displacement: self.displacement(),
            settings: self.settings,
        })
        .width(Length::Fixed(size.width))
        .height(Length::Fixed(size.height));

        Container::new(pad)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }
}
