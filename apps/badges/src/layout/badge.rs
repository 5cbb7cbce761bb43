//! Badge draw instructions. Turns one attendee record into positioned shapes and text.
//!
//! # Badge anatomy (fractions of badge width `bw` / height `bh`, from the badge origin)
//! - background: white filled rectangle covering the whole badge, no border
//! - label:        `"QMAG"` at (0.02 bw, 0.95 bh), left/top aligned
//! - name:         "First Last", bold, wrapped at 0.8 bw, centered at (0.5 bw, 0.65 bh)
//! - organization: normal weight, wrapped at 0.8 bw, centered at (0.5 bw, 0.35 bh)
//!
//! Wrapped lines hang downward from the anchor, `line_spacing` apart. Nothing stops a
//! long block from running past the badge edge.

use serde::{Deserialize, Serialize};

use crate::layout::font_metrics::{FontWeight, MeasureError, TextMeasure};
use crate::layout::grid::{BadgeSlot, GridLayout, Page, PageGeometry, Rect};
use crate::layout::wrap::wrap_text;
use crate::models::AttendeeRecord;

// ────────────────────────────────────────────────────────────────────────────
// Style
// ────────────────────────────────────────────────────────────────────────────

const LABEL_OFFSET_X: f32 = 0.02;
const LABEL_OFFSET_Y: f32 = 0.95;
const NAME_OFFSET_Y: f32 = 0.65;
const ORG_OFFSET_Y: f32 = 0.35;

/// Fixed text and sizes shared by every badge in a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BadgeStyle {
    pub label: String,
    pub label_font_size: f32,
    pub name_font_size: f32,
    pub org_font_size: f32,
    /// Vertical distance between wrapped lines, in inches.
    pub line_spacing: f32,
    /// Printable width as a fraction of badge width.
    pub wrap_fraction: f32,
}

impl Default for BadgeStyle {
    fn default() -> Self {
        Self {
            label: "QMAG".to_string(),
            label_font_size: 12.0,
            name_font_size: 12.0,
            org_font_size: 10.0,
            line_spacing: 0.25,
            wrap_fraction: 0.8,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Draw instructions
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HorizontalAlign {
    /// `anchor_x` is the left edge of each line.
    Left,
    /// `anchor_x` is the horizontal center of each line.
    Center,
}

/// A block of lines hanging from `(anchor_x, anchor_y)`; `anchor_y` is the top of line 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WrappedTextBlock {
    pub lines: Vec<String>,
    pub anchor_x: f32,
    pub anchor_y: f32,
    pub font_size: f32,
    pub line_spacing: f32,
    pub weight: FontWeight,
    pub align: HorizontalAlign,
}

impl WrappedTextBlock {
    /// Each line with the y of its top edge.
    pub fn positioned_lines(&self) -> impl Iterator<Item = (&str, f32)> + '_ {
        self.lines
            .iter()
            .enumerate()
            .map(|(i, line)| (line.as_str(), self.anchor_y - i as f32 * self.line_spacing))
    }
}

/// Everything needed to paint one badge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BadgeDraw {
    pub slot: BadgeSlot,
    pub background: Rect,
    pub label: WrappedTextBlock,
    pub name: WrappedTextBlock,
    pub organization: WrappedTextBlock,
}

/// All badges of one output page, in slot order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagePlan {
    pub index: usize,
    pub badges: Vec<BadgeDraw>,
}

// ────────────────────────────────────────────────────────────────────────────
// Assembly
// ────────────────────────────────────────────────────────────────────────────

/// Builds the draw instructions for `record` placed in `slot`.
pub fn assemble_badge(
    slot: BadgeSlot,
    record: &AttendeeRecord,
    geometry: &PageGeometry,
    style: &BadgeStyle,
    measure: &impl TextMeasure,
) -> Result<BadgeDraw, MeasureError> {
    let rect = geometry.slot_rect(slot);
    let center_x = rect.x + rect.width / 2.0;
    let max_width = rect.width * style.wrap_fraction;

    let label = WrappedTextBlock {
        lines: vec![style.label.clone()],
        anchor_x: rect.x + rect.width * LABEL_OFFSET_X,
        anchor_y: rect.y + rect.height * LABEL_OFFSET_Y,
        font_size: style.label_font_size,
        line_spacing: style.line_spacing,
        weight: FontWeight::Normal,
        align: HorizontalAlign::Left,
    };

    let name = WrappedTextBlock {
        lines: wrap_text(
            &record.full_name(),
            max_width,
            style.name_font_size,
            FontWeight::Bold,
            measure,
        )?,
        anchor_x: center_x,
        anchor_y: rect.y + rect.height * NAME_OFFSET_Y,
        font_size: style.name_font_size,
        line_spacing: style.line_spacing,
        weight: FontWeight::Bold,
        align: HorizontalAlign::Center,
    };

    let organization = WrappedTextBlock {
        lines: wrap_text(
            &record.organization,
            max_width,
            style.org_font_size,
            FontWeight::Normal,
            measure,
        )?,
        anchor_x: center_x,
        anchor_y: rect.y + rect.height * ORG_OFFSET_Y,
        font_size: style.org_font_size,
        line_spacing: style.line_spacing,
        weight: FontWeight::Normal,
        align: HorizontalAlign::Center,
    };

    Ok(BadgeDraw {
        slot,
        background: rect,
        label,
        name,
        organization,
    })
}

/// Builds the draw instructions for every badge on `page`.
pub fn plan_page(
    page: &Page<'_>,
    grid: &GridLayout,
    geometry: &PageGeometry,
    style: &BadgeStyle,
    measure: &impl TextMeasure,
) -> Result<PagePlan, MeasureError> {
    let badges = page
        .records
        .iter()
        .enumerate()
        .map(|(i, record)| assemble_badge(grid.slot(i), record, geometry, style, measure))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PagePlan {
        index: page.index,
        badges,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
