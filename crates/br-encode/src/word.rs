use br_core::cell::Cell;
use br_core::mode::TranslationMode;
use br_core::table::SymbolTable;

/// One item of an encoded cell sequence.
///
/// `Literal` n'apparaît qu'en mode `TranslateWithOriginal` : le caractère
/// source est intercalé tel quel après sa traduction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellItem {
    /// A braille cell, rendered at `U+2800 + bits`.
    Code(Cell),
    /// A pass-through source character, rendered as itself.
    Literal(char),
}

/// Compte les majuscules ASCII, avec sortie anticipée une fois `max` atteint.
fn count_ascii_uppercase_capped(word: &str, max: usize) -> usize {
    let mut count = 0;
    for ch in word.chars() {
        if ch.is_ascii_uppercase() {
            count += 1;
            if count == max {
                return count;
            }
        }
    }
    count
}

/// Règle du mot tout-en-majuscules : aucune minuscule, et au moins deux
/// majuscules A–Z. Un mot d'une seule majuscule ne déclenche pas la règle.
fn is_shouted(word: &str) -> bool {
    word.chars().all(|ch| !ch.is_lowercase()) && count_ascii_uppercase_capped(word, 2) >= 2
}

/// Encode un mot (sans blanc) en séquence de cellules, ajoutée à `out`.
///
/// Trois règles orthogonales, appliquées dans cet ordre :
/// 1. mot tout-en-majuscules → double marqueur capitale en tête, puis le mot
///    est traité en minuscules ;
/// 2. bascule mode nombre : marqueur « nombre » en entrant sur un chiffre,
///    marqueur « lettre » en revenant sur une lettre ;
/// 3. majuscule résiduelle → un marqueur capitale devant sa traduction.
///
/// Aucun chemin d'échec : un caractère hors table dégrade vers
/// [`Cell::UNKNOWN`].
///
/// CONTRAT : n'alloue pas pour lui-même (hors règle 1) ; `out` est fourni
/// par l'appelant et réutilisable d'un mot à l'autre.
///
/// # Example
/// ```
/// use br_core::{SymbolTable, TranslationMode};
/// use br_encode::word::{encode_word, CellItem};
///
/// let table = SymbolTable::new();
/// let mut out = Vec::new();
/// encode_word("Cat", &table, TranslationMode::Translate, &mut out);
/// let bits: Vec<u8> = out.iter().map(|item| match item {
///     CellItem::Code(c) => c.bits(),
///     CellItem::Literal(_) => unreachable!(),
/// }).collect();
/// assert_eq!(bits, vec![0b10_0000, 0b00_1001, 0b00_0001, 0b01_1110]);
/// ```
pub fn encode_word(
    word: &str,
    table: &SymbolTable,
    mode: TranslationMode,
    out: &mut Vec<CellItem>,
) {
    let lowered;
    let word = if is_shouted(word) {
        out.push(CellItem::Code(Cell::CAPITAL_FOLLOWS));
        out.push(CellItem::Code(Cell::CAPITAL_FOLLOWS));
        lowered = word.to_lowercase();
        lowered.as_str()
    } else {
        word
    };

    let mut number_mode = false;

    for source in word.chars() {
        // number/letter mode bracketing; other characters leave the flag alone
        if source.is_ascii_digit() {
            if !number_mode {
                out.push(CellItem::Code(Cell::NUMBER_FOLLOWS));
                number_mode = true;
            }
        } else if source.is_ascii_alphabetic() && number_mode {
            out.push(CellItem::Code(Cell::LETTER_INDICATOR));
            number_mode = false;
        }

        let ch = if source.is_ascii_uppercase() {
            out.push(CellItem::Code(Cell::CAPITAL_FOLLOWS));
            source.to_ascii_lowercase()
        } else {
            source
        };

        for &cell in table.lookup(ch) {
            out.push(CellItem::Code(cell));
        }

        if mode == TranslationMode::TranslateWithOriginal {
            out.push(CellItem::Literal(source));
        }
    }
}
