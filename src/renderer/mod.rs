//! Rendering module
//!
//! Turns game state into tagged draw commands, and draw commands into
//! triangle lists that any GPU or software rasterizer can consume.

pub mod scene;
pub mod shapes;
pub mod vertex;

pub use scene::{DrawCommand, Drawable, EntityRef, build_scene};
pub use shapes::{tessellate, tessellate_scene};
pub use vertex::Vertex;
