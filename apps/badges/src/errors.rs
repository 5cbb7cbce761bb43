use thiserror::Error;

use crate::layout::font_metrics::MeasureError;
use crate::roster::RecordSourceError;

/// Pipeline-level error type.
/// `main` converts it into `anyhow::Error` at the process boundary.
#[derive(Debug, Error)]
pub enum BadgeError {
    #[error(
        "Layout infeasible: badge {badge_width}x{badge_height}in does not fit on a \
         {page_width}x{page_height}in page"
    )]
    LayoutInfeasible {
        page_width: f32,
        page_height: f32,
        badge_width: f32,
        badge_height: f32,
    },

    #[error("Record source error: {0}")]
    RecordSource(#[from] RecordSourceError),

    #[error("Text wrap error: {0}")]
    TextWrap(#[from] MeasureError),

    #[error("Render/write error: {0}")]
    RenderWrite(String),
}
