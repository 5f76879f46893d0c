pub mod input_handler;
pub mod layout;
pub mod view;

pub use input_handler::InputHandler;
pub use view::view;
