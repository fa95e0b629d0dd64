use std::path::Path;
use std::process;

use glagol::glyphsheet::{self, CELL, FONT_PATH, FONT_SIZE, OUT_DIR};

fn main() {
    env_logger::init();

    println!("=== Glagolitic glyph generator ===");
    println!("Font: {FONT_PATH} at {FONT_SIZE}px");
    println!("Cell size: {CELL}x{CELL}px");
    println!("Latin letters are rendered directly; the font substitutes the glyphs.");
    println!();

    match glyphsheet::generate_all(Path::new(FONT_PATH), Path::new(OUT_DIR)) {
        Ok(summary) => {
            println!();
            println!("=== DONE ===");
            println!("Characters generated: {}", summary.generated);
            if summary.failed > 0 {
                println!("Characters skipped: {}", summary.failed);
            }
            println!("Output directory: {OUT_DIR}/");
        }
        Err(err) => {
            eprintln!("ERROR: {err:#}");
            eprintln!("Make sure the Glagolitic font file is available at {FONT_PATH},");
            eprintln!("then run glyphgen again.");

            process::exit(1);
        }
    }
}
