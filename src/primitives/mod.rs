//! Basic value types every token is built from.

mod color;
pub use color::*;

mod font;
pub use font::*;
