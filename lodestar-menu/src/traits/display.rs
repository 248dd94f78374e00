use crate::error::Result;
use crate::theme::Color;

/// Pixel surface used by the graphical menu.
///
/// All coordinates are top-left origin pixels. Drawing never fails from the
/// caller's point of view; implementations clip and drop what they cannot
/// show.
pub trait Screen {
    /// Bring the surface up. An error selects the text fallback.
    fn init(&mut self) -> Result<()>;

    /// Horizontal resolution in pixels.
    fn screen_width(&self) -> usize;

    /// Vertical resolution in pixels.
    fn screen_height(&self) -> usize;

    /// Width of one monospace glyph cell at scale 1.
    fn font_cell_width(&self) -> usize;

    /// Height of one monospace glyph cell at scale 1.
    fn font_cell_height(&self) -> usize;

    /// Fill the whole surface with `color`.
    fn clear(&mut self, color: Color);

    fn fill_rect(&mut self, x: usize, y: usize, width: usize, height: usize, color: Color);

    /// Draw `text` with its top-left corner at `(x, y)`.
    ///
    /// `scale` multiplies the glyph cell in both directions and is at least 1.
    fn draw_text(&mut self, text: &str, x: usize, y: usize, color: Color, scale: usize);
}

impl<T: Screen + ?Sized> Screen for &mut T {
    fn init(&mut self) -> Result<()> {
        (**self).init()
    }

    fn screen_width(&self) -> usize {
        (**self).screen_width()
    }

    fn screen_height(&self) -> usize {
        (**self).screen_height()
    }

    fn font_cell_width(&self) -> usize {
        (**self).font_cell_width()
    }

    fn font_cell_height(&self) -> usize {
        (**self).font_cell_height()
    }

    fn clear(&mut self, color: Color) {
        (**self).clear(color)
    }

    fn fill_rect(&mut self, x: usize, y: usize, width: usize, height: usize, color: Color) {
        (**self).fill_rect(x, y, width, height, color)
    }

    fn draw_text(&mut self, text: &str, x: usize, y: usize, color: Color, scale: usize) {
        (**self).draw_text(text, x, y, color, scale)
    }
}

/// A surface that is never available, for machines without graphics output.
#[derive(Debug, Default, Clone, Copy)]
pub struct Headless;

impl Screen for Headless {
    fn init(&mut self) -> Result<()> {
        Err(crate::error::MenuError::DisplayUnavailable)
    }

    fn screen_width(&self) -> usize {
        0
    }

    fn screen_height(&self) -> usize {
        0
    }

    fn font_cell_width(&self) -> usize {
        0
    }

    fn font_cell_height(&self) -> usize {
        0
    }

    fn clear(&mut self, _color: Color) {}

    fn fill_rect(&mut self, _x: usize, _y: usize, _width: usize, _height: usize, _color: Color) {}

    fn draw_text(&mut self, _text: &str, _x: usize, _y: usize, _color: Color, _scale: usize) {}
}
