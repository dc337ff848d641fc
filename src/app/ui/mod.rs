pub mod history;
pub mod input_box;
pub mod sidebar;
pub mod status;
pub mod suggestions;

pub use input_box::InputBox;
