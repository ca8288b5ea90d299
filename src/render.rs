//! Draws one catalog page onto the display.
//!
//! A render clears the frame, lays out the page body, adds the footer
//! with the button hints and page counter, and flushes the frame. The
//! renderer owns the display for the duration of the draw.

use core::fmt::Write;

use heapless::String;

use crate::catalog::PageCatalog;
use crate::config::{
    BODY_MARGIN_X, BODY_ORIGIN_Y, FOOTER_CAPACITY, FOOTER_X, FOOTER_Y, LINE_HEIGHT, MAX_LINE_CHARS,
};
use crate::error::Error;
use crate::layout::layout;

/// Display collaborator: a buffered monochrome text surface.
pub trait PageSurface {
    /// Blank the frame buffer.
    fn clear(&mut self) -> Result<(), Error>;

    /// Draw `text` with its top-left corner at `(x, y)`.
    fn draw_text(&mut self, x: i32, y: i32, text: &str) -> Result<(), Error>;

    /// Push the frame buffer to the panel.
    fn flush(&mut self) -> Result<(), Error>;
}

/// Footer text: `"A=Prox B=Voltar  {page}/{total}"`, 1-based.
pub fn footer(index: usize, page_count: usize) -> Result<String<FOOTER_CAPACITY>, Error> {
    let mut text = String::new();
    write!(text, "A=Prox B=Voltar  {}/{}", index + 1, page_count)
        .map_err(|_| Error::BufferOverflow)?;
    Ok(text)
}

/// Renders pages of one catalog onto a surface.
pub struct PageRenderer<S> {
    surface: S,
    catalog: PageCatalog,
}

impl<S: PageSurface> PageRenderer<S> {
    pub fn new(surface: S, catalog: PageCatalog) -> Self {
        Self { surface, catalog }
    }

    pub fn catalog(&self) -> &PageCatalog {
        &self.catalog
    }

    /// Make page `index` visible. Out-of-range indices clamp to the last page.
    pub fn render(&mut self, index: usize) -> Result<(), Error> {
        let index = index.min(self.catalog.last_index());
        let content = self.catalog.page(index).unwrap_or_default();

        self.surface.clear()?;

        for line in layout(content, BODY_MARGIN_X, BODY_ORIGIN_Y, LINE_HEIGHT, MAX_LINE_CHARS) {
            if !line.is_blank() {
                self.surface.draw_text(line.x, line.y, line.text)?;
            }
        }

        let footer = footer(index, self.catalog.len())?;
        self.surface.draw_text(FOOTER_X, FOOTER_Y, &footer)?;

        self.surface.flush()
    }
}
