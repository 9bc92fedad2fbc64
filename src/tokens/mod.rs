//! Component tokens built by composing the palette and typography.
//!
//! Layout scalars are in logical pixels. Each component theme bundles every
//! color a component needs across its interaction states.

mod layout;
pub use layout::*;

mod components;
pub use components::*;

mod kinds;
pub use kinds::*;
