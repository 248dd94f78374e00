//! Graphics Output Protocol surface for the graphical menu.
//!
//! The GOP is opened non-exclusively per drawing call and released right
//! after: the firmware console keeps its driver binding and nothing holds the
//! protocol when the selected image starts. Text is rasterised with the
//! bitmaps from `noto-sans-mono-bitmap` and blended over what is on screen.

use alloc::vec;

use log::debug;
use lodestar_menu::{Color, MenuError, Result, Screen};
use noto_sans_mono_bitmap::{get_raster, get_raster_width};
use uefi::Handle;
use uefi::boot::{self, OpenProtocolAttributes, OpenProtocolParams, ScopedProtocol};
use uefi::proto::console::gop::{BltOp, BltPixel, BltRegion, GraphicsOutput};

use crate::config::{FALLBACK_GLYPH, FONT_HEIGHT, FONT_WEIGHT};

#[derive(Default)]
pub struct GopDisplay {
    handle: Option<Handle>,
    width: usize,
    height: usize,
}

impl GopDisplay {
    fn open(&self) -> Option<ScopedProtocol<GraphicsOutput>> {
        let handle = self.handle?;
        match open_gop(handle) {
            Ok(gop) => Some(gop),
            Err(err) => {
                debug!("GOP open failed: {:?}", err);
                None
            }
        }
    }

    /// Clip a rectangle to the screen; `None` when nothing is left.
    fn clip(&self, x: usize, y: usize, width: usize, height: usize) -> Option<(usize, usize)> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let width = width.min(self.width - x);
        let height = height.min(self.height - y);
        (width > 0 && height > 0).then_some((width, height))
    }

    fn fill(&self, x: usize, y: usize, width: usize, height: usize, color: Color) {
        let Some(dims) = self.clip(x, y, width, height) else {
            return;
        };
        let Some(mut gop) = self.open() else {
            return;
        };
        let result = gop.blt(BltOp::VideoFill {
            color: pixel(color),
            dest: (x, y),
            dims,
        });
        if let Err(err) = result {
            debug!("video fill failed: {:?}", err);
        }
    }
}

impl Screen for GopDisplay {
    fn init(&mut self) -> Result<()> {
        let handle = boot::get_handle_for_protocol::<GraphicsOutput>()
            .map_err(|_| MenuError::DisplayUnavailable)?;
        let gop = open_gop(handle).map_err(|_| MenuError::DisplayUnavailable)?;

        let (width, height) = gop.current_mode_info().resolution();
        if width == 0 || height == 0 {
            return Err(MenuError::DisplayUnavailable);
        }

        self.handle = Some(handle);
        self.width = width;
        self.height = height;
        Ok(())
    }

    fn screen_width(&self) -> usize {
        self.width
    }

    fn screen_height(&self) -> usize {
        self.height
    }

    fn font_cell_width(&self) -> usize {
        get_raster_width(FONT_WEIGHT, FONT_HEIGHT)
    }

    fn font_cell_height(&self) -> usize {
        FONT_HEIGHT.val()
    }

    fn clear(&mut self, color: Color) {
        self.fill(0, 0, self.width, self.height, color);
    }

    fn fill_rect(&mut self, x: usize, y: usize, width: usize, height: usize, color: Color) {
        self.fill(x, y, width, height, color);
    }

    fn draw_text(&mut self, text: &str, x: usize, y: usize, color: Color, scale: usize) {
        let scale = scale.max(1);
        let cell_width = self.font_cell_width() * scale;
        let cell_height = self.font_cell_height() * scale;

        let Some((width, height)) =
            self.clip(x, y, text.chars().count() * cell_width, cell_height)
        else {
            return;
        };
        let Some(mut gop) = self.open() else {
            return;
        };

        // glyphs are blended over whatever is already on screen
        let mut buffer = vec![BltPixel::new(0, 0, 0); width * height];
        if let Err(err) = gop.blt(BltOp::VideoToBltBuffer {
            buffer: &mut buffer,
            src: (x, y),
            dest: BltRegion::Full,
            dims: (width, height),
        }) {
            debug!("text background read failed: {:?}", err);
        }

        for (column, c) in text.chars().enumerate() {
            let Some(glyph) = get_raster(c, FONT_WEIGHT, FONT_HEIGHT)
                .or_else(|| get_raster(FALLBACK_GLYPH, FONT_WEIGHT, FONT_HEIGHT))
            else {
                continue;
            };

            for (row, line) in glyph.raster().iter().enumerate() {
                for (col, &intensity) in line.iter().enumerate() {
                    if intensity == 0 {
                        continue;
                    }
                    for sy in 0..scale {
                        let py = row * scale + sy;
                        if py >= height {
                            break;
                        }
                        for sx in 0..scale {
                            let px = column * cell_width + col * scale + sx;
                            if px >= width {
                                break;
                            }
                            let target = &mut buffer[py * width + px];
                            *target = blend(*target, color, intensity);
                        }
                    }
                }
            }
        }

        if let Err(err) = gop.blt(BltOp::BufferToVideo {
            buffer: &buffer,
            src: BltRegion::Full,
            dest: (x, y),
            dims: (width, height),
        }) {
            debug!("text write failed: {:?}", err);
        }
    }
}

fn open_gop(handle: Handle) -> uefi::Result<ScopedProtocol<GraphicsOutput>> {
    // SAFETY: GetProtocol leaves the console driver bound to the GOP. The scope
    // is dropped at the end of each drawing call and the handle outlives it.
    unsafe {
        boot::open_protocol::<GraphicsOutput>(
            OpenProtocolParams {
                handle,
                agent: boot::image_handle(),
                controller: None,
            },
            OpenProtocolAttributes::GetProtocol,
        )
    }
}

fn pixel(color: Color) -> BltPixel {
    BltPixel::new(color.red(), color.green(), color.blue())
}

/// Mix `color` over `under` with glyph coverage `alpha` (0..=255).
fn blend(under: BltPixel, color: Color, alpha: u8) -> BltPixel {
    let alpha = alpha as u16;
    let mix = |bg: u8, fg: u8| ((fg as u16 * alpha + bg as u16 * (255 - alpha)) / 255) as u8;
    BltPixel::new(
        mix(under.red, color.red()),
        mix(under.green, color.green()),
        mix(under.blue, color.blue()),
    )
}
