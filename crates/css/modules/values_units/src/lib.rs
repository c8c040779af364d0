//! CSS Values and Units Module Level 3: the numeric model used by layout.
//! Spec: <https://www.w3.org/TR/css-values-3/>
//!
//! Values arrive here already cascaded and computed to CSS px; this crate only models them and
//! resolves percentages and keywords against reference sizes.

#![forbid(unsafe_code)]

// Per-chapter modules mirroring the spec table of contents.
pub mod chapter_4_numbers;
pub mod chapter_5_percentages;
pub mod chapter_6_dimensions;
pub mod geometry;

// Re-exports for ergonomic access from other crates.
pub use chapter_4_numbers::CssNumber;
pub use chapter_5_percentages::Percentage;
pub use chapter_6_dimensions::CssDimension;
pub use geometry::{CssMarginRectangle, CssPoint, CssRectangle, CssSize};
