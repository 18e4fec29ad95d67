//! Core value types: colours, HSV, and the parameter objects passed into
//! the engine.

pub mod colour;
pub mod hsv;
pub mod params;
pub mod pattern;

pub use colour::Colour;
pub use hsv::Hsv;
pub use params::RecolorParams;
pub use pattern::{PatternKind, PatternSpec, Resolution};
