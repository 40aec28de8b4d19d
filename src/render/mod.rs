pub mod renderer;

pub use renderer::{Renderer, tag_color};
