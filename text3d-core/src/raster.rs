//! Glyph rasterization on top of `fontdue`.
//!
//! The layout engine only ever sees a [`GlyphSource`]: something that turns a
//! character into an ink mask plus an advance width. [`FontFace`] is the real
//! implementation; tests substitute synthetic sources.

use std::fs;
use std::path::Path;

use fontdue::{Font, FontSettings};

use crate::error::{ConvertError, ConvertResult};

/// Boolean ink mask for one rasterized glyph.
///
/// Row-major, row 0 at the top of the glyph. A cell is `true` when the
/// rasterizer reported any coverage there.
#[derive(Debug, Clone)]
pub struct PixelMask {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl PixelMask {
    /// Threshold a coverage buffer (one byte per pixel) into an ink mask
    pub fn from_coverage(width: usize, height: usize, coverage: &[u8]) -> Self {
        debug_assert_eq!(coverage.len(), width * height);
        Self {
            width,
            height,
            cells: coverage.iter().map(|&c| c > 0).collect(),
        }
    }

    /// Build a mask directly from rows of booleans
    pub fn from_rows(rows: &[&[bool]]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.len());
        let mut cells = Vec::with_capacity(width * height);
        for row in rows {
            debug_assert_eq!(row.len(), width);
            cells.extend_from_slice(row);
        }
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// A mask with no rows or no columns holds no ink at all
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[y * self.width + x]
    }

    /// Number of lit cells
    pub fn lit_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }
}

/// One rasterized glyph: ink mask plus horizontal advance
#[derive(Debug, Clone)]
pub struct Glyph {
    pub mask: PixelMask,
    pub advance: f32,
}

/// Source of rasterized glyphs.
///
/// The seam between the layout engine and the font backend. Advance widths
/// are in the same pixel units as the mask grid.
pub trait GlyphSource {
    fn glyph(&self, ch: char) -> Glyph;
}

/// A font face opened from disk and fixed at one pixel size.
///
/// Owns the parsed font for exactly one conversion run; dropping it releases
/// the resource.
pub struct FontFace {
    font: Font,
    size: f32,
}

impl FontFace {
    /// Open a TrueType/OpenType font file and fix its rasterization size
    pub fn load(path: &Path, size: u32) -> ConvertResult<Self> {
        let bytes = fs::read(path).map_err(|e| ConvertError::font(path, e))?;
        let font = Font::from_bytes(bytes, FontSettings::default())
            .map_err(|e| ConvertError::font(path, e))?;

        log::info!("loaded font {} at {}px", path.display(), size);

        Ok(Self {
            font,
            size: size as f32,
        })
    }
}

impl GlyphSource for FontFace {
    fn glyph(&self, ch: char) -> Glyph {
        let (metrics, coverage) = self.font.rasterize(ch, self.size);
        Glyph {
            mask: PixelMask::from_coverage(metrics.width, metrics.height, &coverage),
            advance: metrics.advance_width,
        }
    }
}
