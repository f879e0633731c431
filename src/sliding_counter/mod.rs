pub mod action;
pub mod counter;
pub mod drag;
pub mod feedback;
pub mod message;
pub mod pad;
pub mod spring;
pub mod state;
