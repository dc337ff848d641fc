pub mod action;
pub mod events;

pub use action::ActionService;
pub use events::EventService;
