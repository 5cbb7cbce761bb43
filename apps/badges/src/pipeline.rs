//! Badge pipeline: roster, layout, renderer, one page at a time.
//!
//! Order of operations:
//! 1. grid feasibility (no IO happens if the badge cannot fit the page)
//! 2. roster loading
//! 3. pagination
//! 4. for each page: plan (wrap text, place badges), then render
//! 5. write the document once, at the end

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::errors::BadgeError;
use crate::layout::{paginate, plan_page, BadgeStyle, GridLayout, Page, PageGeometry};
use crate::render::{DocumentRenderer, PdfRenderer};
use crate::roster::load_records;

const DOCUMENT_TITLE: &str = "Name Badges";

/// What a completed run produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub records: usize,
    pub pages: usize,
    pub grid: GridLayout,
}

/// Runs the whole pipeline described by `config`.
///
/// An empty roster produces no pages and no output file.
pub fn run(config: &Config) -> Result<RunSummary, BadgeError> {
    let geometry = config.geometry;
    let grid = GridLayout::compute(&geometry)?;
    info!(
        "Badge grid: {} columns x {} rows ({} per page)",
        grid.columns, grid.rows, grid.badges_per_page
    );

    let records = load_records(
        &config.input_path,
        &config.input_encoding,
        config.input_delimiter,
    )?;
    let pages = paginate(&records, &grid);
    debug!("{} records need {} pages", records.len(), grid.page_count(records.len()));

    if pages.is_empty() {
        if config.output_path.exists() {
            warn!(
                "No attendee records found; existing {} left untouched",
                config.output_path.display()
            );
        } else {
            warn!("No attendee records found; nothing written to {}", config.output_path.display());
        }
        return Ok(RunSummary {
            records: 0,
            pages: 0,
            grid,
        });
    }

    let mut renderer = PdfRenderer::new(DOCUMENT_TITLE, geometry)?;
    render_pages(&pages, &grid, &geometry, &config.style(), &mut renderer)?;
    info!("Rendered {} pages, writing document", renderer.pages_rendered());
    renderer.finish(&config.output_path)?;

    Ok(RunSummary {
        records: records.len(),
        pages: pages.len(),
        grid,
    })
}

/// Plans and renders each page in order. A page is fully drawn before the next is planned.
pub fn render_pages<R: DocumentRenderer>(
    pages: &[Page<'_>],
    grid: &GridLayout,
    geometry: &PageGeometry,
    style: &BadgeStyle,
    renderer: &mut R,
) -> Result<(), BadgeError> {
    for page in pages {
        let plan = plan_page(page, grid, geometry, style, &*renderer)?;
        renderer.render_page(&plan)?;
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
