//! Grid calculator: how many badges fit on a page and which page each record lands on.
//!
//! All lengths are in inches with the origin at the bottom-left corner of the page,
//! which is the PDF convention. Row 0 is the top row of badges.

use serde::{Deserialize, Serialize};

use crate::errors::BadgeError;
use crate::models::AttendeeRecord;

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

/// Physical page and badge dimensions, in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    pub page_width: f32,
    pub page_height: f32,
    pub badge_width: f32,
    pub badge_height: f32,
}

/// Axis-aligned rectangle; `(x, y)` is the bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Badge grid derived from a `PageGeometry`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridLayout {
    pub columns: usize,
    pub rows: usize,
    pub badges_per_page: usize,
}

/// Position of a badge within a page. Row 0 is topmost, column 0 leftmost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BadgeSlot {
    pub row: usize,
    pub col: usize,
}

/// One output page: a contiguous run of at most `badges_per_page` records.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a> {
    pub index: usize,
    pub records: &'a [AttendeeRecord],
}

// ────────────────────────────────────────────────────────────────────────────
// Geometry
// ────────────────────────────────────────────────────────────────────────────

/// A4 portrait.
pub const A4_WIDTH_IN: f32 = 8.27;
pub const A4_HEIGHT_IN: f32 = 11.69;

/// 90 mm × 54 mm badge, the common conference lanyard card.
pub const BADGE_WIDTH_IN: f32 = 90.0 / 25.4;
pub const BADGE_HEIGHT_IN: f32 = 54.0 / 25.4;

impl Default for PageGeometry {
    fn default() -> Self {
        Self {
            page_width: A4_WIDTH_IN,
            page_height: A4_HEIGHT_IN,
            badge_width: BADGE_WIDTH_IN,
            badge_height: BADGE_HEIGHT_IN,
        }
    }
}

impl PageGeometry {
    /// Page-space rectangle of the badge in `slot`.
    pub fn slot_rect(&self, slot: BadgeSlot) -> Rect {
        Rect {
            x: slot.col as f32 * self.badge_width,
            y: self.page_height - (slot.row + 1) as f32 * self.badge_height,
            width: self.badge_width,
            height: self.badge_height,
        }
    }

    fn infeasible(&self) -> BadgeError {
        BadgeError::LayoutInfeasible {
            page_width: self.page_width,
            page_height: self.page_height,
            badge_width: self.badge_width,
            badge_height: self.badge_height,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Grid + pagination
// ────────────────────────────────────────────────────────────────────────────

impl GridLayout {
    /// Computes how many whole badges fit across and down the page.
    ///
    /// Fails with `LayoutInfeasible` when not even one badge fits, when any dimension
    /// is non-positive or not finite, or when the per-page count overflows `usize`.
    pub fn compute(geometry: &PageGeometry) -> Result<Self, BadgeError> {
        let dims = [
            geometry.page_width,
            geometry.page_height,
            geometry.badge_width,
            geometry.badge_height,
        ];
        if dims.iter().any(|d| !d.is_finite() || *d <= 0.0) {
            return Err(geometry.infeasible());
        }

        let columns = (geometry.page_width / geometry.badge_width).floor() as usize;
        let rows = (geometry.page_height / geometry.badge_height).floor() as usize;
        if columns < 1 || rows < 1 {
            return Err(geometry.infeasible());
        }
        let badges_per_page = columns
            .checked_mul(rows)
            .ok_or_else(|| geometry.infeasible())?;

        Ok(Self {
            columns,
            rows,
            badges_per_page,
        })
    }

    /// Number of pages needed for `record_count` badges. Zero records → zero pages.
    pub fn page_count(&self, record_count: usize) -> usize {
        record_count.div_ceil(self.badges_per_page)
    }

    /// Slot of the badge at `local_index` within its page, filled row by row.
    pub fn slot(&self, local_index: usize) -> BadgeSlot {
        BadgeSlot {
            row: local_index / self.columns,
            col: local_index % self.columns,
        }
    }
}

/// Splits `records` into pages of `grid.badges_per_page`, preserving order.
pub fn paginate<'a>(records: &'a [AttendeeRecord], grid: &GridLayout) -> Vec<Page<'a>> {
    records
        .chunks(grid.badges_per_page)
        .enumerate()
        .map(|(index, records)| Page { index, records })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
