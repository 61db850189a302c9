pub mod color;
pub mod display;
pub mod registry;

pub use color::Rgb;
pub use display::DisplayParams;
pub use registry::{EdgeEntry, ShapeEntry};
