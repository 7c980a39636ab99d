/// Glyph layout and per-pixel box extrusion
use crate::geometry::Mesh;
use crate::raster::{GlyphSource, PixelMask};

/// Layout parameters for one conversion run
#[derive(Debug, Clone, Copy)]
pub struct LayoutOptions {
    /// Box thickness along the extrusion axis, must be positive
    pub extrusion_depth: f32,
    /// Gap appended after every meshed character, in pixel units
    pub letter_spacing: f32,
    /// Cursor advance for a space character. A configured width, not the
    /// font's space metric.
    pub space_advance: f32,
}

/// Extrude every lit mask cell into a closed box at the given horizontal
/// offset.
///
/// Cells are visited in row-major order (row ascending, column ascending),
/// so the output always holds exactly 12 triangles per lit cell, in
/// emission order. An all-dark mask yields an empty mesh.
pub fn mesh_glyph(mask: &PixelMask, offset: f32, depth: f32) -> Mesh {
    let mut mesh = Mesh::with_capacity(mask.lit_count() * 12);
    for y in 0..mask.height() {
        for x in 0..mask.width() {
            if mask.get(x, y) {
                mesh.merge(Mesh::pixel_box(offset + x as f32, y as f32, depth));
            }
        }
    }
    mesh
}

/// Walk the text left to right and build the combined mesh.
///
/// A single cursor tracks horizontal placement:
///   - a space advances the cursor by `space_advance` and emits nothing;
///   - a glyph whose mask has zero area advances by its reported advance
///     width and emits nothing (no letter spacing either);
///   - any other glyph is meshed at the current cursor, then the cursor
///     advances by its advance width plus `letter_spacing`.
///
/// Per-glyph meshes are merged in acceptance order; an input with zero
/// accepted glyphs returns an empty mesh for the caller to report.
pub fn build_text_mesh<S: GlyphSource>(source: &S, text: &str, opts: &LayoutOptions) -> Mesh {
    let mut combined = Mesh::new();
    let mut cursor = 0.0f32;
    let mut accepted = 0usize;

    for ch in text.chars() {
        if ch == ' ' {
            cursor += opts.space_advance;
            continue;
        }

        let glyph = source.glyph(ch);
        if glyph.mask.is_empty() {
            cursor += glyph.advance;
            continue;
        }

        combined.merge(mesh_glyph(&glyph.mask, cursor, opts.extrusion_depth));
        accepted += 1;
        cursor += glyph.advance + opts.letter_spacing;
    }

    log::debug!(
        "laid out {} glyphs, {} triangles",
        accepted,
        combined.triangles.len()
    );

    combined
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::Glyph;
    use std::collections::HashMap;

    /// Glyph source backed by a fixed table; unknown characters rasterize
    /// to a zero-area mask with a fallback advance.
    struct TableSource {
        glyphs: HashMap<char, (PixelMask, f32)>,
        fallback_advance: f32,
    }

    impl TableSource {
        fn new() -> Self {
            Self {
                glyphs: HashMap::new(),
                fallback_advance: 7.0,
            }
        }

        fn with(mut self, ch: char, rows: &[&[bool]], advance: f32) -> Self {
            self.glyphs.insert(ch, (PixelMask::from_rows(rows), advance));
            self
        }
    }

    impl GlyphSource for TableSource {
        fn glyph(&self, ch: char) -> Glyph {
            match self.glyphs.get(&ch) {
                Some((mask, advance)) => Glyph {
                    mask: mask.clone(),
                    advance: *advance,
                },
                None => Glyph {
                    mask: PixelMask::from_rows(&[]),
                    advance: self.fallback_advance,
                },
            }
        }
    }

    fn opts() -> LayoutOptions {
        LayoutOptions {
            extrusion_depth: 10.0,
            letter_spacing: 50.0,
            space_advance: 150.0,
        }
    }

    fn min_x(mesh: &Mesh) -> f32 {
        mesh.triangles
            .iter()
            .flat_map(|t| t.vertices.iter())
            .map(|v| v.position.x)
            .fold(f32::INFINITY, f32::min)
    }

    #[test]
    fn test_triangle_count_tracks_lit_cells() {
        let mask = PixelMask::from_rows(&[
            &[true, false, false],
            &[true, false, false],
            &[true, true, true],
        ]);
        let mesh = mesh_glyph(&mask, 0.0, 10.0);
        assert_eq!(mesh.triangles.len(), 12 * 5);
    }

    #[test]
    fn test_all_dark_mask_yields_empty_mesh() {
        let mask = PixelMask::from_rows(&[&[false, false], &[false, false]]);
        assert!(mesh_glyph(&mask, 3.0, 10.0).is_empty());
    }

    #[test]
    fn test_space_advances_by_configured_width_only() {
        let source = TableSource::new().with('a', &[&[true]], 4.0);

        let alone = build_text_mesh(&source, "a", &opts());
        let shifted = build_text_mesh(&source, " a", &opts());

        // The glyph after the space sits exactly space_advance further right,
        // regardless of any font metric.
        assert_eq!(min_x(&shifted), min_x(&alone) + 150.0);
    }

    #[test]
    fn test_space_emits_no_geometry() {
        let source = TableSource::new();
        assert!(build_text_mesh(&source, "   ", &opts()).is_empty());
    }

    #[test]
    fn test_empty_glyph_advances_without_letter_spacing() {
        // 'x' is unknown to the table, so it rasterizes empty with the
        // fallback advance of 7.0 and must not add letter spacing.
        let source = TableSource::new().with('a', &[&[true]], 4.0);
        let mesh = build_text_mesh(&source, "xa", &opts());
        assert_eq!(min_x(&mesh), 7.0);
    }

    #[test]
    fn test_placements_are_monotonic_and_distinct() {
        let source = TableSource::new()
            .with('a', &[&[true]], 4.0)
            .with('b', &[&[true]], 6.0);

        let a = build_text_mesh(&source, "a", &opts());
        let ab = build_text_mesh(&source, "ab", &opts());

        // 'a' keeps its placement, 'b' lands strictly to its right.
        assert_eq!(min_x(&ab), min_x(&a));
        let b_offset = 4.0 + 50.0;
        assert!(ab
            .triangles
            .iter()
            .skip(12)
            .all(|t| t.vertices.iter().all(|v| v.position.x >= b_offset)));
    }

    #[test]
    fn test_merge_order_matches_per_glyph_layout() {
        let a_rows: &[&[bool]] = &[&[true, true]];
        let b_rows: &[&[bool]] = &[&[true]];
        let source = TableSource::new().with('a', a_rows, 4.0).with('b', b_rows, 5.0);

        let combined = build_text_mesh(&source, "ab", &opts());

        let mut expected = mesh_glyph(&PixelMask::from_rows(a_rows), 0.0, 10.0);
        expected.merge(mesh_glyph(&PixelMask::from_rows(b_rows), 4.0 + 50.0, 10.0));

        assert_eq!(combined.triangles.len(), expected.triangles.len());
        for (got, want) in combined.triangles.iter().zip(expected.triangles.iter()) {
            for (gv, wv) in got.vertices.iter().zip(want.vertices.iter()) {
                assert_eq!(gv.position, wv.position);
            }
        }
    }
}
