mod settings;
mod sliding_counter;

use iced::Theme;

use crate::sliding_counter::state::SlidingCounter;

fn main() -> iced::Result {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    iced::application("Sliding Counter", SlidingCounter::update, SlidingCounter::view)
        .subscription(SlidingCounter::subscription)
        .theme(|_| Theme::Dark)
        .antialiasing(true)
        .window_size((400.0, 300.0))
        .run_with(SlidingCounter::new)
}
