/// Braille base codepoint (U+2800).
pub const BRAILLE_BASE: u32 = 0x2800;

/// One six-dot braille cell, stored as a 6-bit code.
///
/// Dot numbering to bit mapping:
/// ```text
///  1 4     dot 1 → bit 0, dot 2 → bit 1, dot 3 → bit 2,
///  2 5     dot 4 → bit 3, dot 5 → bit 4, dot 6 → bit 5
///  3 6
/// ```
///
/// Invariant : le code reste toujours dans [0, 63].
///
/// # Example
/// ```
/// use br_core::cell::Cell;
/// assert_eq!(Cell::new(0b000001).to_char(), '⠁');
/// assert_eq!(Cell::new(0).to_char(), '\u{2800}');
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell(u8);

impl Cell {
    /// Fallback cell for characters with no table entry.
    pub const UNKNOWN: Cell = Cell(0b11_1111);
    /// Marker emitted when entering number mode.
    pub const NUMBER_FOLLOWS: Cell = Cell(0b11_1100);
    /// Marker emitted before a capitalized letter (doubled for all-caps words).
    pub const CAPITAL_FOLLOWS: Cell = Cell(0b10_0000);
    /// Marker emitted when leaving number mode back to letters.
    pub const LETTER_INDICATOR: Cell = Cell(0b00_0110);

    /// Construit une cellule depuis un code 6 bits. Les bits hors plage sont masqués.
    ///
    /// # Example
    /// ```
    /// use br_core::cell::Cell;
    /// assert_eq!(Cell::new(0b01_1010).bits(), 0b01_1010);
    /// ```
    #[must_use]
    pub const fn new(bits: u8) -> Self {
        Self(bits & 0b11_1111)
    }

    /// Raw 6-bit code.
    #[inline(always)]
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Rend la cellule comme caractère braille Unicode (`U+2800 + code`).
    ///
    /// # Example
    /// ```
    /// use br_core::cell::Cell;
    /// assert_eq!(Cell::UNKNOWN.to_char(), '\u{283F}');
    /// assert_eq!(Cell::CAPITAL_FOLLOWS.to_char(), '⠠');
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn to_char(self) -> char {
        char::from_u32(BRAILLE_BASE + u32::from(self.0)).unwrap_or(' ')
    }

    /// Bitwise OR of two cells. Used by the table derivation rules.
    #[must_use]
    pub const fn with(self, extra: u8) -> Self {
        Self::new(self.0 | extra)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_masks_to_six_bits() {
        assert_eq!(Cell::new(0xFF).bits(), 0b11_1111);
        assert_eq!(Cell::new(0b100_0001).bits(), 0b00_0001);
    }

    #[test]
    fn empty_cell_is_blank_pattern() {
        assert_eq!(Cell::new(0).to_char(), '\u{2800}');
    }

    #[test]
    fn full_cell_is_six_dot_block() {
        // 0b111111 → U+283F, all six dots raised
        assert_eq!(Cell::UNKNOWN.to_char(), '\u{283F}');
    }

    #[test]
    fn control_codes_render_in_block() {
        assert_eq!(Cell::NUMBER_FOLLOWS.to_char(), '⠼');
        assert_eq!(Cell::CAPITAL_FOLLOWS.to_char(), '⠠');
        assert_eq!(Cell::LETTER_INDICATOR.to_char(), '⠆');
    }

    #[test]
    fn derivation_or_sets_dots() {
        let a = Cell::new(0b00_0001);
        assert_eq!(a.with(0b00_0100).bits(), 0b00_0101); // k from a
        assert_eq!(a.with(0b10_0100).bits(), 0b10_0101); // u from a
    }
}
