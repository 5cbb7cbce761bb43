// Renderer/Writer: paints page plans onto page canvases and writes one document.

pub mod pdf;

use std::path::Path;

use crate::errors::BadgeError;
use crate::layout::{PagePlan, TextMeasure};

pub use pdf::PdfRenderer;

/// An output document backend.
///
/// Renderers measure text with the same metrics they draw with, so the layout engine
/// asks the renderer itself for widths. Pages arrive in order; a page is complete when
/// `render_page` returns and is never touched again.
pub trait DocumentRenderer: TextMeasure {
    fn render_page(&mut self, plan: &PagePlan) -> Result<(), BadgeError>;

    /// Writes the finished document to `output`, replacing any existing file.
    fn finish(self, output: &Path) -> Result<(), BadgeError>
    where
        Self: Sized;
}
