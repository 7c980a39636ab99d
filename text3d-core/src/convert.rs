/// End-to-end text to STL conversion
use std::path::{Path, PathBuf};

use crate::error::{ConvertError, ConvertResult};
use crate::layout::{self, LayoutOptions};
use crate::raster::{FontFace, GlyphSource};
use crate::stl;
use crate::transform;

/// Conversion parameters.
///
/// Defaults: 150px glyphs, 10 units of extrusion depth, 50px between
/// letters, and a 0.1 output scale.
#[derive(Debug, Clone)]
pub struct TextConfig {
    /// Path to a .ttf/.otf/.ttc font file
    pub font_path: PathBuf,
    /// Rasterization size in pixels; also the cursor advance for a space
    pub font_size: u32,
    /// Box thickness along the extrusion axis, must be positive
    pub extrusion_depth: f32,
    /// Extra gap appended after every meshed character, in pixels
    pub letter_spacing: f32,
    /// Uniform scale applied to the finished mesh
    pub scale_factor: f32,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            font_path: PathBuf::new(),
            font_size: 150,
            extrusion_depth: 10.0,
            letter_spacing: 50.0,
            scale_factor: 0.1,
        }
    }
}

/// What a finished conversion produced
#[derive(Debug, Clone)]
pub struct ConvertSummary {
    pub triangles: usize,
    pub path: PathBuf,
}

/// Convert a line of text into a binary STL file.
///
/// Opens the configured font (the only external resource; it lives for
/// exactly this call), lays the text out, canonicalizes the mesh and writes
/// it. Each failure mode surfaces as its own [`ConvertError`] variant.
pub fn convert(text: &str, output: &Path, config: &TextConfig) -> ConvertResult<ConvertSummary> {
    let face = FontFace::load(&config.font_path, config.font_size)?;
    convert_with(&face, text, output, config)
}

/// Run the conversion pipeline over any glyph source.
///
/// Split out from [`convert`] so the pipeline can run against synthetic
/// glyph sources.
pub fn convert_with<S: GlyphSource>(
    source: &S,
    text: &str,
    output: &Path,
    config: &TextConfig,
) -> ConvertResult<ConvertSummary> {
    let opts = LayoutOptions {
        extrusion_depth: config.extrusion_depth,
        letter_spacing: config.letter_spacing,
        space_advance: config.font_size as f32,
    };

    let mut mesh = layout::build_text_mesh(source, text, &opts);
    if mesh.is_empty() {
        // Never run the centering statistics or touch the writer for a
        // mesh with no vertices.
        return Err(ConvertError::EmptyResult);
    }

    transform::canonicalize(&mut mesh, config.scale_factor);

    let triangles = mesh.triangles.len();
    stl::write_stl(&mesh, output)?;

    Ok(ConvertSummary {
        triangles,
        path: output.to_path_buf(),
    })
}
