//! retint - theme asset recoloring engine
//!
//! A library for recoloring desktop theme bitmaps: per-pixel tint blending
//! with white/black/transparency preservation, HSV adjustment, procedural
//! overlay pattern synthesis, pattern compositing, and dominant colour
//! extraction.

pub mod cli;
pub mod composite;
pub mod error;
pub mod extract;
pub mod io;
pub mod output;
pub mod pattern;
pub mod recolor;
pub mod types;

pub use composite::{composite, composite_path, load_pattern};
pub use error::{Result, RetintError};
pub use extract::{extract, ExtractStrategy};
pub use io::{load_rgba, save_png};
pub use pattern::{synthesize, synthesize_at};
pub use recolor::{grayscale, recolor, recolor_colour};
pub use types::{Colour, Hsv, PatternKind, PatternSpec, RecolorParams, Resolution};
