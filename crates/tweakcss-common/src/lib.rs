//! Common utilities for the TweakCSS panel.
//!
//! This crate provides shared infrastructure used by the value toolkit and
//! the CLI:
//! - **Name formatting** - custom property names turned into panel labels
//! - **Numeric coercion** - `parseFloat`-style leading-number extraction
//! - **Sequence comparison** - shallow, order-sensitive slice equality
//! - **Warning system** - deduplicated terminal output for unsupported values

pub mod name;
pub mod number;
pub mod seq;
pub mod warning;
