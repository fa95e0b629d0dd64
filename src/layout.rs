//! Cursor placement on the canvas.
//!
//! Coordinates are logical pixels with the origin in the top-left corner and
//! y growing downward; the canvas widget maps them onto the terminal grid.

/// Logical canvas size.
pub const CANVAS_WIDTH: f64 = 1585.0;
pub const CANVAS_HEIGHT: f64 = 868.0;

/// Where the first symbol of an empty buffer lands.
pub const ORIGIN_X: f64 = 150.0;
pub const ORIGIN_Y: f64 = 100.0;

pub const LINE_HEIGHT: f64 = 40.0;
pub const SPACE_ADVANCE: f64 = 30.0;
pub const GLYPH_ADVANCE: f64 = 35.0;

/// Once the cursor has advanced past this, the next symbol starts a new line.
pub const RIGHT_MARGIN: f64 = CANVAS_WIDTH - 100.0;

/// One drawable symbol with its top-left position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedGlyph {
    pub ch: char,
    pub x: f64,
    pub y: f64,
}

/// The placed symbols of a buffer plus the position the next symbol would
/// take, in buffer order.
#[derive(Clone, Debug, PartialEq)]
pub struct TextLayout {
    pub glyphs: Vec<PlacedGlyph>,
    pub cursor: (f64, f64),
}

/// Walks `text` once, advancing a cursor per symbol.
///
/// Line breaks reset x to the origin and add one line height; spaces advance
/// without being placed. The wrap check runs after a placed symbol advances
/// the cursor, so spaces alone never wrap and a symbol drawn just inside the
/// margin may end past it.
pub fn place(text: &str) -> TextLayout {
    let mut x = ORIGIN_X;
    let mut y = ORIGIN_Y;
    let mut glyphs = Vec::new();

    for ch in text.chars() {
        match ch {
            '\n' => {
                x = ORIGIN_X;
                y += LINE_HEIGHT;
            }
            ' ' => {
                x += SPACE_ADVANCE;
            }
            _ => {
                glyphs.push(PlacedGlyph { ch, x, y });
                x += GLYPH_ADVANCE;
                if x > RIGHT_MARGIN {
                    x = ORIGIN_X;
                    y += LINE_HEIGHT;
                }
            }
        }
    }

    TextLayout {
        glyphs,
        cursor: (x, y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_buffer_places_nothing() {
        let layout = place("");
        assert!(layout.glyphs.is_empty());
        assert_eq!(layout.cursor, (ORIGIN_X, ORIGIN_Y));
    }

    #[test]
    fn test_first_symbol_at_origin() {
        let layout = place("a");
        assert_eq!(
            layout.glyphs,
            vec![PlacedGlyph {
                ch: 'a',
                x: ORIGIN_X,
                y: ORIGIN_Y
            }]
        );
        assert_eq!(layout.cursor, (ORIGIN_X + GLYPH_ADVANCE, ORIGIN_Y));
    }

    #[test]
    fn test_glyph_and_space_advances() {
        let layout = place("ab c");
        assert_eq!(layout.glyphs[1].x, ORIGIN_X + GLYPH_ADVANCE);
        assert_eq!(
            layout.glyphs[2].x,
            ORIGIN_X + 2.0 * GLYPH_ADVANCE + SPACE_ADVANCE
        );
        assert!(layout.glyphs.iter().all(|g| g.y == ORIGIN_Y));
    }

    #[test]
    fn test_newline_resets_to_left_margin() {
        let layout = place("a\nb");
        assert_eq!(layout.glyphs[0].x, ORIGIN_X);
        assert_eq!(layout.glyphs[0].y, ORIGIN_Y);
        assert_eq!(layout.glyphs[1].x, ORIGIN_X);
        assert_eq!(layout.glyphs[1].y, ORIGIN_Y + LINE_HEIGHT);
    }

    // 150 + 35 * 38 = 1480 still fits; advancing to 1515 crosses 1485, so
    // line one holds 39 symbols and the 40th starts line two.
    #[test]
    fn test_wrap_at_the_right_margin() {
        let text: String = std::iter::repeat_n('k', 40).collect();
        let layout = place(&text);

        assert_eq!(layout.glyphs[38].x, 1480.0);
        assert_eq!(layout.glyphs[38].y, ORIGIN_Y);
        assert_eq!(layout.glyphs[39].x, ORIGIN_X);
        assert_eq!(layout.glyphs[39].y, ORIGIN_Y + LINE_HEIGHT);
    }

    // Spaces advance the cursor past the margin without wrapping; the next
    // placed symbol draws out there and only then wraps. After 38 symbols the
    // cursor is at 1480, two spaces push it to 1540.
    #[test]
    fn test_spaces_do_not_trigger_the_wrap_check() {
        let mut text: String = std::iter::repeat_n('k', 38).collect();
        text.push_str("  x");
        let layout = place(&text);

        let last = layout.glyphs.last().unwrap();
        assert_eq!(last.ch, 'x');
        assert_eq!(last.x, 1540.0);
        assert_eq!(last.y, ORIGIN_Y);
        assert_eq!(layout.cursor, (ORIGIN_X, ORIGIN_Y + LINE_HEIGHT));
    }
}
