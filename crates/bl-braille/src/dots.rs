//! Table des points Braille (U+2800)
//!
//! Bits activés :
//! +------+------+
//! | 0x01 | 0x08 |
//! +------+------+
//! | 0x02 | 0x10 |
//! +------+------+
//! | 0x04 | 0x20 |
//! +------+------+
//! | 0x40 | 0x80 |
//! +------+------+
//!
//! Colonne gauche = points 1, 2, 3, 7 ; colonne droite = points 4, 5, 6, 8.

/// Braille base codepoint (U+2800).
pub const BRAILLE_BASE: u32 = 0x2800;

/// The empty braille cell, treated as blank when trimming.
pub const BLANK: char = '\u{2800}';

/// Pixels per cell, horizontally.
pub const CELL_WIDTH: u32 = 2;

/// Pixels per cell, vertically.
pub const CELL_HEIGHT: u32 = 4;

/// `(dy, dx, bit)` for each of the 8 dots of a cell.
pub const DOT_MAP: [(u32, u32, u8); 8] = [
    (0, 0, 0x01),
    (1, 0, 0x02),
    (2, 0, 0x04),
    (0, 1, 0x08),
    (1, 1, 0x10),
    (2, 1, 0x20),
    (3, 0, 0x40),
    (3, 1, 0x80),
];

/// Map un entier 8-bits (0 à 255) vers le caractère Braille correspondant.
///
/// # Example
/// ```
/// use bl_braille::dots::braille_char;
/// assert_eq!(braille_char(0), '\u{2800}');
/// assert_eq!(braille_char(0xFF), '\u{28FF}');
/// ```
#[must_use]
#[inline(always)]
pub const fn braille_char(code: u8) -> char {
    // U+2800..=U+28FF est toujours un scalaire valide.
    match char::from_u32(BRAILLE_BASE + code as u32) {
        Some(c) => c,
        None => ' ',
    }
}
