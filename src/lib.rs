//! Design tokens for the NCDS design system.
//!
//! Tokens are grouped the way the design system documents them:
//! [`primitives`] hold the value types, [`palette`] and [`typography`] are the
//! foundation, and [`tokens`] composes them into per-component themes.
//! Everything is a `const`, so any constant can be used on its own.

pub mod primitives;

pub mod palette;

pub mod typography;

pub mod tokens;

#[cfg(feature = "gpui")]
mod gpui_ext;
