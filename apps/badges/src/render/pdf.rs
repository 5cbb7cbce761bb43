//! PDF backend on `printpdf`, using the builtin Helvetica faces.
//!
//! Layout coordinates are inches from the bottom-left page corner, which matches PDF
//! user space once converted to millimetres. Text blocks are anchored at the top of each
//! line, so the renderer drops each baseline by the font ascent.

use std::io::{BufWriter, Write};
use std::path::Path;

use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerIndex,
    PdfLayerReference, PdfPageIndex, Rect, Rgb,
};
use tracing::debug;

use crate::errors::BadgeError;
use crate::layout::badge::BadgeDraw;
use crate::layout::font_metrics::get_metrics;
use crate::layout::{
    BuiltinMetrics, FontWeight, HorizontalAlign, MeasureError, PageGeometry, PagePlan,
    TextMeasure, WrappedTextBlock,
};
use crate::render::DocumentRenderer;

const MM_PER_INCH: f32 = 25.4;
const LAYER_NAME: &str = "Badges";

fn mm(inches: f32) -> Mm {
    Mm(inches * MM_PER_INCH)
}

fn pdf_error(e: impl std::fmt::Display) -> BadgeError {
    BadgeError::RenderWrite(e.to_string())
}

pub struct PdfRenderer {
    doc: PdfDocumentReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    geometry: PageGeometry,
    /// `PdfDocument::new` always creates one page; it is handed out to the first plan.
    initial_page: Option<(PdfPageIndex, PdfLayerIndex)>,
    pages_rendered: usize,
}

impl PdfRenderer {
    pub fn new(title: &str, geometry: PageGeometry) -> Result<Self, BadgeError> {
        let (doc, page, layer) = PdfDocument::new(
            title,
            mm(geometry.page_width),
            mm(geometry.page_height),
            LAYER_NAME,
        );
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(pdf_error)?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(pdf_error)?;

        Ok(Self {
            doc,
            regular,
            bold,
            geometry,
            initial_page: Some((page, layer)),
            pages_rendered: 0,
        })
    }

    pub fn pages_rendered(&self) -> usize {
        self.pages_rendered
    }

    fn next_canvas(&mut self, index: usize) -> PdfLayerReference {
        let (page, layer) = self.initial_page.take().unwrap_or_else(|| {
            self.doc.add_page(
                mm(self.geometry.page_width),
                mm(self.geometry.page_height),
                format!("{LAYER_NAME} {}", index + 1),
            )
        });
        self.doc.get_page(page).get_layer(layer)
    }

    fn font(&self, weight: FontWeight) -> &IndirectFontRef {
        match weight {
            FontWeight::Normal => &self.regular,
            FontWeight::Bold => &self.bold,
        }
    }

    fn draw_badge(&self, canvas: &PdfLayerReference, badge: &BadgeDraw) -> Result<(), BadgeError> {
        let bg = badge.background;
        canvas.set_fill_color(Color::Rgb(Rgb::new(1.0, 1.0, 1.0, None)));
        canvas.add_rect(
            Rect::new(
                mm(bg.x),
                mm(bg.y),
                mm(bg.x + bg.width),
                mm(bg.y + bg.height),
            )
            .with_mode(PaintMode::Fill),
        );

        canvas.set_fill_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
        for block in [&badge.label, &badge.name, &badge.organization] {
            self.draw_block(canvas, block)?;
        }
        Ok(())
    }

    fn draw_block(
        &self,
        canvas: &PdfLayerReference,
        block: &WrappedTextBlock,
    ) -> Result<(), BadgeError> {
        let ascent = get_metrics(block.weight).ascent_in(block.font_size);
        let font = self.font(block.weight);

        for (line, top) in block.positioned_lines() {
            if line.is_empty() {
                continue;
            }
            let x = match block.align {
                HorizontalAlign::Left => block.anchor_x,
                HorizontalAlign::Center => {
                    block.anchor_x - self.measure_width(line, block.font_size, block.weight)? / 2.0
                }
            };
            canvas.use_text(line, block.font_size, mm(x), mm(top - ascent), font);
        }
        Ok(())
    }
}

impl TextMeasure for PdfRenderer {
    fn measure_width(
        &self,
        text: &str,
        font_size_pt: f32,
        weight: FontWeight,
    ) -> Result<f32, MeasureError> {
        BuiltinMetrics.measure_width(text, font_size_pt, weight)
    }
}

impl DocumentRenderer for PdfRenderer {
    fn render_page(&mut self, plan: &PagePlan) -> Result<(), BadgeError> {
        let canvas = self.next_canvas(plan.index);
        for badge in &plan.badges {
            self.draw_badge(&canvas, badge)?;
        }
        self.pages_rendered += 1;
        debug!("Rendered page {} with {} badges", plan.index + 1, plan.badges.len());
        Ok(())
    }

    /// Saves into a temporary file next to `output` and renames it into place, so a
    /// failed write never leaves a truncated document at the destination.
    fn finish(self, output: &Path) -> Result<(), BadgeError> {
        let dir = match output.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(pdf_error)?;

        {
            let mut writer = BufWriter::new(tmp.as_file_mut());
            self.doc.save(&mut writer).map_err(pdf_error)?;
            writer.flush().map_err(pdf_error)?;
        }

        tmp.persist(output).map_err(|e| pdf_error(e.error))?;
        Ok(())
    }
}
