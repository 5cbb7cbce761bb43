// Layout engine: grid arithmetic, greedy word-wrap, per-badge draw instructions.
// Everything here is pure; text measurement is always passed in by the caller.

pub mod badge;
pub mod font_metrics;
pub mod grid;
pub mod wrap;

// Re-export the public API consumed by the pipeline and renderer.
pub use badge::{plan_page, BadgeStyle, HorizontalAlign, PagePlan, WrappedTextBlock};
pub use font_metrics::{BuiltinMetrics, FontWeight, MeasureError, TextMeasure};
pub use grid::{paginate, GridLayout, Page, PageGeometry};
