//! Pre-rendered glyph bitmaps.
//!
//! At startup the converter probes the shared asset directory for PNGs
//! written by `glyphgen`. Each decoded glyph is reduced to its inked pixel
//! coordinates, ready to be drawn as canvas points. Every failure mode here
//! downgrades to symbolic rendering; none of them is fatal.

use std::collections::HashMap;
use std::path::Path;

#[cfg(feature = "bitmap-glyphs")]
use std::fs;

#[cfg(feature = "bitmap-glyphs")]
use anyhow::{Context, Result, anyhow};
#[cfg(feature = "bitmap-glyphs")]
use log::{debug, warn};
use log::info;

/// Directory both programs agree on: `glyphgen` writes it, the converter
/// scans it.
pub const ASSET_DIR: &str = "chars/img";

/// Filename convention for one pre-rendered letter.
pub const ASSET_SUFFIX: &str = "_ttf.png";

/// Alpha above this counts as ink when reducing a bitmap to dots.
pub const INK_CUTOFF: u8 = 127;

pub fn asset_filename(letter: char) -> String {
    format!("{letter}{ASSET_SUFFIX}")
}

/// One decoded glyph: the pixel coordinates that carry ink, relative to the
/// bitmap's top-left corner.
pub struct GlyphBitmap {
    pub width: u32,
    pub height: u32,
    pub dots: Vec<(u16, u16)>,
}

/// The Latin-letter-to-bitmap mapping, populated once and read-only after.
#[derive(Default)]
pub struct GlyphAssets {
    glyphs: HashMap<char, GlyphBitmap>,
}

impl GlyphAssets {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Scans `dir` for generator-produced PNGs and decodes them.
    ///
    /// A missing directory or an unreadable file downgrades the result, with
    /// the reason logged; the converter then renders symbolically.
    #[cfg(feature = "bitmap-glyphs")]
    pub fn probe(dir: &Path) -> Self {
        let mut glyphs = HashMap::new();

        if !dir.is_dir() {
            warn!(
                "asset directory {} not found; run glyphgen to pre-render bitmap glyphs",
                dir.display()
            );
            return Self { glyphs };
        }

        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                warn!("cannot read {}: {err}", dir.display());
                return Self { glyphs };
            }
        };

        for entry in entries.flatten() {
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            let Some(letter) = letter_for(name) else {
                debug!("skipping {name}: not a glyph bitmap");
                continue;
            };
            match read_glyph(&entry.path()) {
                Ok(bitmap) => {
                    glyphs.insert(letter, bitmap);
                }
                Err(err) => warn!("failed to load {name}: {err:#}"),
            }
        }

        info!(
            "loaded {} bitmap glyphs from {}",
            glyphs.len(),
            dir.display()
        );
        Self { glyphs }
    }

    /// Compiled without the decoder; always degrades to symbolic rendering.
    #[cfg(not(feature = "bitmap-glyphs"))]
    pub fn probe(dir: &Path) -> Self {
        let _ = dir;
        info!("built without the bitmap-glyphs feature; rendering symbolically");
        Self::empty()
    }

    /// Whether bitmap rendering is available at all.
    pub fn enhanced(&self) -> bool {
        !self.glyphs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// The bitmap for a letter's lowercase form, if one was loaded.
    pub fn get(&self, ch: char) -> Option<&GlyphBitmap> {
        self.glyphs.get(&ch.to_ascii_lowercase())
    }

    #[cfg(test)]
    pub(crate) fn from_glyphs(glyphs: HashMap<char, GlyphBitmap>) -> Self {
        Self { glyphs }
    }
}

/// Extracts the letter from a filename following the naming convention:
/// `d_ttf.png` loads as `d`. Anything else, including the overview sheet
/// sitting in the same directory, is skipped.
#[cfg(feature = "bitmap-glyphs")]
fn letter_for(filename: &str) -> Option<char> {
    let stem = filename.strip_suffix(ASSET_SUFFIX)?;
    let mut chars = stem.chars();
    let letter = chars.next()?;
    if chars.next().is_some() || !letter.is_ascii_alphabetic() {
        return None;
    }
    Some(letter.to_ascii_lowercase())
}

#[cfg(feature = "bitmap-glyphs")]
fn read_glyph(path: &Path) -> Result<GlyphBitmap> {
    let bytes =
        fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    decode_glyph(&bytes)
}

#[cfg(feature = "bitmap-glyphs")]
fn decode_glyph(bytes: &[u8]) -> Result<GlyphBitmap> {
    let img = image::load_from_memory_with_format(bytes, image::ImageFormat::Png)
        .context("decoding PNG")?
        .to_rgba8();
    let (width, height) = img.dimensions();
    let limit = u32::from(u16::MAX);
    if width > limit || height > limit {
        return Err(anyhow!(
            "bitmap {width}x{height} exceeds the {limit}x{limit} glyph limit"
        ));
    }

    let mut dots = Vec::new();
    for (x, y, pixel) in img.enumerate_pixels() {
        if pixel.0[3] > INK_CUTOFF {
            dots.push((x as u16, y as u16));
        }
    }

    Ok(GlyphBitmap {
        width,
        height,
        dots,
    })
}
