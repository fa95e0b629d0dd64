//! Batch pre-rendering of the alphabet through the Glagolitic font.
//!
//! The font's own character map turns Latin code points into Glagolitic
//! shapes, so rasterizing `'a'` already yields the right glyph; no script
//! conversion happens here. Each letter becomes one transparent 64x64 PNG,
//! and the batch ends with a composite overview sheet on white.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use fontdue::{Font, FontSettings};
use log::warn;

use crate::assets::asset_filename;
use crate::font5x7;

/// Fixed font location; the generator refuses to start without it.
pub const FONT_PATH: &str = "chars/GLAGA___.TTF";

/// Where the PNGs land; the converter scans the same directory.
pub const OUT_DIR: &str = "chars/img";

pub const FONT_SIZE: f32 = 32.0;

/// Square cell edge in pixels, for both the single PNGs and the sheet cells.
pub const CELL: usize = 64;

pub const SHEET_COLUMNS: usize = 8;
pub const SHEET_NAME: &str = "overview_ttf.png";

const LABEL_INK: [u8; 4] = [255, 0, 0, 255];

/// Batch outcome: how many letters made it and how many were skipped.
pub struct Summary {
    pub generated: usize,
    pub failed: usize,
}

/// One rasterized letter, centered in its cell; alpha coverage only.
pub struct GlyphCell {
    coverage: Vec<u8>,
}

impl GlyphCell {
    /// Black ink over a transparent background.
    pub fn to_rgba_transparent(&self) -> Vec<u8> {
        self.coverage.iter().flat_map(|&a| [0, 0, 0, a]).collect()
    }

    /// Black ink composited onto opaque white, for the overview sheet.
    pub fn to_rgba_on_white(&self) -> Vec<u8> {
        self.coverage
            .iter()
            .flat_map(|&a| {
                let v = 255 - a;
                [v, v, v, 255]
            })
            .collect()
    }
}

pub fn load_font(path: &Path) -> Result<Font> {
    let data = fs::read(path).with_context(|| format!("reading font {}", path.display()))?;
    Font::from_bytes(data, FontSettings::default())
        .map_err(|err| anyhow!("parsing font {}: {err}", path.display()))
}

/// Rasterizes one letter and centers its ink box in the cell.
pub fn render_cell(font: &Font, letter: char) -> Result<GlyphCell> {
    if font.lookup_glyph_index(letter) == 0 {
        return Err(anyhow!("the font has no glyph for {letter:?}"));
    }
    let (metrics, coverage) = font.rasterize(letter, FONT_SIZE);
    compose_cell(metrics.width, metrics.height, &coverage)
}

fn compose_cell(width: usize, height: usize, coverage: &[u8]) -> Result<GlyphCell> {
    if width > CELL || height > CELL {
        return Err(anyhow!(
            "ink box {width}x{height} does not fit the {CELL}x{CELL} cell"
        ));
    }

    let x0 = (CELL - width) / 2;
    let y0 = (CELL - height) / 2;
    let mut cell = vec![0u8; CELL * CELL];
    for row in 0..height {
        for col in 0..width {
            cell[(y0 + row) * CELL + x0 + col] = coverage[row * width + col];
        }
    }

    Ok(GlyphCell { coverage: cell })
}

/// Renders the whole alphabet: one PNG per letter plus the overview sheet.
///
/// The font missing is fatal before anything is written; a single letter
/// failing to render or write is logged and skipped.
pub fn generate_all(font_path: &Path, out_dir: &Path) -> Result<Summary> {
    let font = load_font(font_path)?;

    if out_dir.is_dir() {
        println!("output directory {} already exists", out_dir.display());
    } else {
        fs::create_dir_all(out_dir)
            .with_context(|| format!("creating {}", out_dir.display()))?;
        println!("output directory {} created", out_dir.display());
    }

    let mut generated = 0;
    let mut failed = 0;
    let mut cells = Vec::new();

    for letter in 'a'..='z' {
        let cell = match render_cell(&font, letter) {
            Ok(cell) => cell,
            Err(err) => {
                warn!("rendering '{letter}': {err}");
                failed += 1;
                continue;
            }
        };

        let name = asset_filename(letter);
        match write_png(
            &out_dir.join(&name),
            CELL as u32,
            CELL as u32,
            &cell.to_rgba_transparent(),
        ) {
            Ok(()) => {
                println!("wrote {name} (latin '{letter}' rendered through the font)");
                generated += 1;
                cells.push((letter, cell));
            }
            Err(err) => {
                warn!("writing {name}: {err:#}");
                failed += 1;
            }
        }
    }

    if let Err(err) = write_sheet(out_dir, &cells) {
        warn!("overview sheet: {err:#}");
    }

    Ok(Summary { generated, failed })
}

/// Grid composite of every rendered cell: 8 columns, computed row count,
/// each cell on white with a red uppercase label in its corner.
fn write_sheet(out_dir: &Path, cells: &[(char, GlyphCell)]) -> Result<()> {
    if cells.is_empty() {
        warn!("no cells rendered; skipping the overview sheet");
        return Ok(());
    }

    let rows = sheet_rows(cells.len());
    let width = SHEET_COLUMNS * CELL;
    let height = rows * CELL;
    let mut rgba = vec![255u8; width * height * 4];

    for (index, (letter, cell)) in cells.iter().enumerate() {
        let ox = (index % SHEET_COLUMNS) * CELL;
        let oy = (index / SHEET_COLUMNS) * CELL;
        blit_cell(&mut rgba, width, ox, oy, cell);
        stamp_label(&mut rgba, width, ox + 2, oy + 2, *letter);
    }

    write_png(&out_dir.join(SHEET_NAME), width as u32, height as u32, &rgba)?;
    println!(
        "wrote {SHEET_NAME} ({} cells, {SHEET_COLUMNS}x{rows})",
        cells.len()
    );
    Ok(())
}

fn sheet_rows(cell_count: usize) -> usize {
    cell_count.div_ceil(SHEET_COLUMNS)
}

fn blit_cell(rgba: &mut [u8], sheet_width: usize, ox: usize, oy: usize, cell: &GlyphCell) {
    let cell_rgba = cell.to_rgba_on_white();
    for row in 0..CELL {
        let src = row * CELL * 4;
        let dst = ((oy + row) * sheet_width + ox) * 4;
        rgba[dst..dst + CELL * 4].copy_from_slice(&cell_rgba[src..src + CELL * 4]);
    }
}

/// Stamps the letter's uppercase 5x7 form in red, top-left anchored.
fn stamp_label(rgba: &mut [u8], sheet_width: usize, x: usize, y: usize, letter: char) {
    let Some(rows) = font5x7::rows(letter) else {
        return;
    };
    for (dy, bits) in rows.iter().enumerate() {
        for dx in 0..font5x7::GLYPH_WIDTH {
            if bits & (0x10 >> dx) != 0 {
                let dst = ((y + dy) * sheet_width + x + dx) * 4;
                rgba[dst..dst + 4].copy_from_slice(&LABEL_INK);
            }
        }
    }
}

fn write_png(path: &Path, width: u32, height: u32, rgba: &[u8]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut encoder = png::Encoder::new(BufWriter::new(file), width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(rgba)?;
    writer.finish()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn px(rgba: &[u8], width: usize, x: usize, y: usize) -> [u8; 4] {
        let at = (y * width + x) * 4;
        [rgba[at], rgba[at + 1], rgba[at + 2], rgba[at + 3]]
    }

    #[test]
    fn test_compose_centers_the_ink_box() {
        let coverage = [10, 20, 30, 40, 50, 60, 70, 80];
        let cell = compose_cell(4, 2, &coverage).unwrap();

        // (64 - 4) / 2 = 30, (64 - 2) / 2 = 31.
        assert_eq!(cell.coverage[31 * CELL + 30], 10);
        assert_eq!(cell.coverage[31 * CELL + 33], 40);
        assert_eq!(cell.coverage[32 * CELL + 30], 50);
        assert_eq!(cell.coverage[32 * CELL + 33], 80);
        assert_eq!(cell.coverage[0], 0);
    }

    #[test]
    fn test_compose_rejects_oversized_ink() {
        assert!(compose_cell(CELL + 1, 2, &[]).is_err());
        assert!(compose_cell(2, CELL + 1, &[]).is_err());
    }

    #[test]
    fn test_rgba_conversions() {
        let cell = compose_cell(1, 1, &[200]).unwrap();
        let transparent = cell.to_rgba_transparent();
        let on_white = cell.to_rgba_on_white();
        // (64 - 1) / 2 = 31 on both axes.
        let center = (31 * CELL + 31) * 4;

        assert_eq!(&transparent[center..center + 4], &[0, 0, 0, 200]);
        assert_eq!(&on_white[center..center + 4], &[55, 55, 55, 255]);
        // Uncovered pixels stay transparent and white respectively.
        assert_eq!(&transparent[0..4], &[0, 0, 0, 0]);
        assert_eq!(&on_white[0..4], &[255, 255, 255, 255]);
    }

    #[test]
    fn test_sheet_row_count() {
        assert_eq!(sheet_rows(26), 4);
        assert_eq!(sheet_rows(8), 1);
        assert_eq!(sheet_rows(9), 2);
        assert_eq!(sheet_rows(1), 1);
    }

    #[test]
    fn test_blit_targets_the_right_cell() {
        let cell = compose_cell(CELL, CELL, &vec![255u8; CELL * CELL]).unwrap();
        let width = 2 * CELL;
        let mut rgba = vec![255u8; width * CELL * 4];

        blit_cell(&mut rgba, width, CELL, 0, &cell);

        assert_eq!(px(&rgba, width, CELL, 0), [0, 0, 0, 255]);
        assert_eq!(px(&rgba, width, 0, 0), [255, 255, 255, 255]);
    }

    #[test]
    fn test_label_is_stamped_in_red() {
        let width = 16;
        let mut rgba = vec![255u8; width * width * 4];

        stamp_label(&mut rgba, width, 2, 2, 'a');

        // Row 0 of 'A' is .XXX. so (3, 2) carries ink and (2, 2) does not.
        assert_eq!(px(&rgba, width, 3, 2), LABEL_INK);
        assert_eq!(px(&rgba, width, 2, 2), [255, 255, 255, 255]);
        // Row 3 is the crossbar, fully inked.
        assert_eq!(px(&rgba, width, 2, 5), LABEL_INK);
        assert_eq!(px(&rgba, width, 6, 5), LABEL_INK);
    }

    // Full batch against the real font; skipped quietly when the font file
    // is not checked out next to the crate.
    #[test]
    fn test_batch_writes_alphabet_and_sheet() {
        let font_path = Path::new(FONT_PATH);
        if !font_path.exists() {
            return;
        }

        let out_dir = std::env::temp_dir().join("glagol-glyphsheet-test");
        let _ = fs::remove_dir_all(&out_dir);

        let summary = generate_all(font_path, &out_dir).unwrap();
        assert_eq!(summary.generated + summary.failed, 26);

        let singles = fs::read_dir(&out_dir)
            .unwrap()
            .flatten()
            .filter(|e| {
                let name = e.file_name();
                let name = name.to_string_lossy();
                name.ends_with("_ttf.png") && name.len() == "a_ttf.png".len()
            })
            .count();
        assert_eq!(singles, summary.generated);
        if summary.generated > 0 {
            assert!(out_dir.join(SHEET_NAME).exists());
        }

        let _ = fs::remove_dir_all(&out_dir);
    }
}
