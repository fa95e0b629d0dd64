//! The static Latin to Glagolitic character table.
//!
//! Total over `a..=z` in both cases, built once as literals. Letters the
//! historical script never had borrow a neighbour's symbol: `q` shares `r`'s
//! glyph and `w` shares `v`'s, while `x` falls back to the double-barred L
//! (U+2C60).

/// Looks up the Glagolitic symbol for a Latin letter, case-insensitively.
///
/// Returns `None` for anything outside the supported alphabet; callers pass
/// such characters through unchanged.
pub fn glagolitic(ch: char) -> Option<char> {
    Some(match ch.to_ascii_lowercase() {
        'a' => 'Ⰰ', // U+2C00
        'b' => 'Ⰱ', // U+2C01
        'v' => 'Ⰲ', // U+2C02
        'g' => 'Ⰳ', // U+2C03
        'd' => 'Ⰴ', // U+2C04
        'e' => 'Ⰵ', // U+2C05
        'z' => 'Ⰸ', // U+2C08
        'i' => 'Ⰹ', // U+2C09
        'y' => 'Ⰺ', // U+2C0A
        'k' => 'Ⰽ', // U+2C0D
        'l' => 'Ⰾ', // U+2C0E
        'm' => 'Ⰿ', // U+2C0F
        'n' => 'Ⱀ', // U+2C10
        'o' => 'Ⱁ', // U+2C11
        'p' => 'Ⱂ', // U+2C12
        'r' => 'Ⱃ', // U+2C13
        's' => 'Ⱄ', // U+2C14
        't' => 'Ⱅ', // U+2C15
        'u' => 'Ⱆ', // U+2C16
        'f' => 'Ⱇ', // U+2C17
        'h' => 'Ⱈ', // U+2C18
        'c' => 'Ⱌ', // U+2C1C
        'j' => 'Ⰻ', // U+2C0B
        'q' => 'Ⱃ', // U+2C13, same as r
        'w' => 'Ⰲ', // U+2C02, same as v
        'x' => 'Ⱡ', // U+2C60, one past the Glagolitic block
        _ => return None,
    })
}

/// Maps every letter of `text` through the table; everything else (digits,
/// punctuation, spaces, newlines) passes through unchanged.
pub fn transliterate(text: &str) -> String {
    text.chars().map(|c| glagolitic(c).unwrap_or(c)).collect()
}
