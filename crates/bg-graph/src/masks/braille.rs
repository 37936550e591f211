//! Implémentation mathématique O(1) Braille (U+2800)
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

/// Braille base codepoint (U+2800), no raised dots.
pub const BRAILLE_BASE: u32 = 0x2800;

/// Map un entier 8-bits (0 à 255) vers le caractère Braille correspondant.
/// Calcule mathématiquement le point de code `U+2800 + offset`.
///
/// # Example
/// ```
/// use bg_graph::masks::get_braille_char;
/// assert_eq!(get_braille_char(0x00), '\u{2800}');
/// assert_eq!(get_braille_char(0xFF), '\u{28FF}');
/// ```
#[must_use]
#[inline(always)]
pub const fn get_braille_char(bitmask: u8) -> char {
    // Le bloc Unicode Braille est mappé bit à bit sur l'offset 0x2800.
    match char::from_u32(BRAILLE_BASE + bitmask as u32) {
        Some(c) => c,
        None => ' ',
    }
}

/// One Braille character cell, stored as its 8-bit dot mask.
///
/// # Example
/// ```
/// use bg_graph::masks::BrailleCell;
/// let cell = BrailleCell::BLANK.with(0x09).with(0x02);
/// assert_eq!(cell.bits(), 0x0B);
/// assert_eq!(cell.to_char(), '⠋');
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrailleCell(u8);

impl BrailleCell {
    /// Cell with no raised dots (U+2800).
    pub const BLANK: Self = Self(0);

    /// Raise the dots of `mask` on top of the current ones.
    #[must_use]
    pub const fn with(self, mask: u8) -> Self {
        Self(self.0 | mask)
    }

    /// In-place variant of [`BrailleCell::with`].
    pub fn raise(&mut self, mask: u8) {
        self.0 |= mask;
    }

    /// Raw dot mask.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Full Unicode codepoint, always in `0x2800..=0x28FF`.
    #[must_use]
    pub const fn codepoint(self) -> u32 {
        BRAILLE_BASE | self.0 as u32
    }

    /// Character displayed for this cell.
    #[must_use]
    pub const fn to_char(self) -> char {
        get_braille_char(self.0)
    }
}
