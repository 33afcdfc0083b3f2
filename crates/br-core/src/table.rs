use crate::cell::Cell;

/// Dot 3, ajouté aux lettres k–t.
const DOT_3: u8 = 0b00_0100;
/// Dots 3 et 6, ajoutés aux lettres u, v, x, y, z.
const DOTS_3_6: u8 = 0b10_0100;

/// Translation of one source character: 1 or 2 cells.
#[derive(Clone, Copy, Debug)]
struct Entry {
    cells: [Cell; 2],
    len: u8,
}

impl Entry {
    const EMPTY: Entry = Entry {
        cells: [Cell::new(0); 2],
        len: 0,
    };

    const fn one(a: u8) -> Self {
        Self {
            cells: [Cell::new(a), Cell::new(0)],
            len: 1,
        }
    }

    const fn two(a: u8, b: u8) -> Self {
        Self {
            cells: [Cell::new(a), Cell::new(b)],
            len: 2,
        }
    }
}

const UNKNOWN_ENTRY: [Cell; 1] = [Cell::UNKNOWN];

/// Table de correspondance caractère → cellules braille.
///
/// Construite une fois au démarrage, jamais modifiée ensuite. La table ne
/// contient que des minuscules : l'encodeur abaisse la casse avant le lookup.
/// Les lettres sont dérivées des chiffres par les règles classiques
/// (k–t = a–j + point 3, u–z = a–e + points 3 et 6, w à part).
///
/// # Example
/// ```
/// use br_core::table::SymbolTable;
/// let table = SymbolTable::new();
/// assert_eq!(table.lookup('a')[0].bits(), 0b00_0001);
/// assert_eq!(table.lookup('€')[0].bits(), 0b11_1111); // fallback
/// ```
pub struct SymbolTable {
    entries: [Entry; 128],
}

impl SymbolTable {
    /// Construit la table complète : chiffres, 26 lettres dérivées, ponctuation.
    #[must_use]
    #[allow(clippy::too_many_lines)]
    pub fn new() -> Self {
        let mut entries = [Entry::EMPTY; 128];

        let mut set = |ch: char, entry: Entry| {
            entries[ch as usize] = entry;
        };

        // digits
        set('1', Entry::one(0b00_0001)); // ⠁
        set('2', Entry::one(0b00_0011)); // ⠃
        set('3', Entry::one(0b00_1001)); // ⠉
        set('4', Entry::one(0b01_1001)); // ⠙
        set('5', Entry::one(0b01_0001)); // ⠑
        set('6', Entry::one(0b00_1011)); // ⠋
        set('7', Entry::one(0b01_1011)); // ⠛
        set('8', Entry::one(0b01_0011)); // ⠓
        set('9', Entry::one(0b00_1010)); // ⠊
        set('0', Entry::one(0b01_1010)); // ⠚

        // simple punctuation
        set('\'', Entry::one(0b00_0100));
        set(',', Entry::one(0b00_0010));
        set('.', Entry::one(0b11_0010));
        set('?', Entry::one(0b10_0110));
        set('!', Entry::one(0b01_0110));
        set(';', Entry::one(0b00_0110));
        set(':', Entry::one(0b01_0010));
        set('-', Entry::one(0b10_0100));
        set('"', Entry::two(0b10_0000, 0b11_0110));

        // directional punctuation
        set('(', Entry::two(0b01_0000, 0b10_0011));
        set(')', Entry::two(0b01_0000, 0b01_1100));
        set('[', Entry::two(0b10_1000, 0b10_0011));
        set(']', Entry::two(0b10_1000, 0b01_1100));
        set('{', Entry::two(0b11_1000, 0b10_0011));
        set('}', Entry::two(0b11_1000, 0b01_1100));
        set('<', Entry::two(0b00_1000, 0b10_0011));
        set('>', Entry::two(0b00_1000, 0b01_1100));
        set('/', Entry::two(0b11_1000, 0b00_1100));
        set('\\', Entry::two(0b11_1000, 0b10_0001));

        // weirder punctuation
        set('~', Entry::two(0b00_1000, 0b01_0100));
        set('@', Entry::two(0b00_1000, 0b00_0001));
        set('#', Entry::two(0b11_1000, 0b11_1001));
        set('$', Entry::two(0b00_1000, 0b00_1110));
        set('%', Entry::two(0b10_1000, 0b11_0100));
        set('^', Entry::two(0b00_1000, 0b10_0010));
        set('&', Entry::two(0b00_1000, 0b10_1111));
        set('*', Entry::two(0b01_0000, 0b01_0100));
        set('_', Entry::two(0b10_1000, 0b10_0100));
        set('=', Entry::two(0b01_0000, 0b11_0110));
        set('+', Entry::two(0b01_0000, 0b01_0110));
        set('|', Entry::two(0b11_1000, 0b11_0011));
        set('`', Entry::two(0b10_1000, 0b10_0001));

        // a–j alias the digits 1–9, 0
        let digits = ['1', '2', '3', '4', '5', '6', '7', '8', '9', '0'];
        for (i, letter) in ('a'..='j').enumerate() {
            entries[letter as usize] = entries[digits[i] as usize];
        }

        // k–t = a–j with dot 3 raised
        for i in 0..10usize {
            let base = entries['a' as usize + i].cells[0];
            entries['k' as usize + i] = Entry {
                cells: [base.with(DOT_3), Cell::new(0)],
                len: 1,
            };
        }

        // u, v, x, y, z = a–e with dots 3 and 6 raised
        for (i, letter) in ['u', 'v', 'x', 'y', 'z'].into_iter().enumerate() {
            let base = entries['a' as usize + i].cells[0];
            entries[letter as usize] = Entry {
                cells: [base.with(DOTS_3_6), Cell::new(0)],
                len: 1,
            };
        }

        // w postdates the original ten-letter alphabet, fixed pattern
        entries['w' as usize] = Entry::one(0b11_1010);

        Self { entries }
    }

    /// Lookup pur, O(1), sans échec : tout caractère hors table retourne la
    /// cellule « inconnue ».
    ///
    /// # Example
    /// ```
    /// use br_core::table::SymbolTable;
    /// let table = SymbolTable::new();
    /// assert_eq!(table.lookup('w')[0].bits(), 0b11_1010);
    /// assert_eq!(table.lookup('"').len(), 2);
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn lookup(&self, ch: char) -> &[Cell] {
        let Ok(idx) = usize::try_from(u32::from(ch)) else {
            return &UNKNOWN_ENTRY;
        };
        match self.entries.get(idx) {
            Some(entry) if entry.len > 0 => &entry.cells[..entry.len as usize],
            _ => &UNKNOWN_ENTRY,
        }
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}
