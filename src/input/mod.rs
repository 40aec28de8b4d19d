pub mod handler;

pub use handler::{InputHandler, KeyAction, key_identifier};
