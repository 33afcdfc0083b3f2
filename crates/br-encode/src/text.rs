use br_core::mode::TranslationMode;
use br_core::table::SymbolTable;

use crate::word::{CellItem, encode_word};

/// Un segment du texte source : mot ou séquence de blancs.
///
/// La concaténation des segments dans l'ordre reproduit l'entrée octet pour
/// octet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Non-whitespace run, goes through the word encoder.
    Word(&'a str),
    /// Whitespace run, passed through verbatim.
    Whitespace(&'a str),
}

/// Découpe régénérative en alternance mot / blancs.
///
/// # Example
/// ```
/// use br_encode::text::{Segment, Segments};
/// let segments: Vec<_> = Segments::new("a  b").collect();
/// assert_eq!(segments, vec![
///     Segment::Word("a"),
///     Segment::Whitespace("  "),
///     Segment::Word("b"),
/// ]);
/// ```
pub struct Segments<'a> {
    rest: &'a str,
}

impl<'a> Segments<'a> {
    /// Iterate over the alternating word/whitespace runs of `text`.
    #[must_use]
    pub const fn new(text: &'a str) -> Self {
        Self { rest: text }
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.rest.chars().next()?;
        let in_whitespace = first.is_whitespace();
        let end = self
            .rest
            .find(|ch: char| ch.is_whitespace() != in_whitespace)
            .unwrap_or(self.rest.len());
        let (run, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(if in_whitespace {
            Segment::Whitespace(run)
        } else {
            Segment::Word(run)
        })
    }
}

/// Encode un blob de texte complet en préservant les blancs à l'identique.
///
/// Pure et totale : aucun chemin d'échec, quelle que soit l'entrée (la chaîne
/// vide s'encode en elle-même). En mode `Disabled`, le texte revient inchangé.
///
/// # Example
/// ```
/// use br_core::{SymbolTable, TranslationMode};
/// use br_encode::text::encode_text;
///
/// let table = SymbolTable::new();
/// assert_eq!(encode_text("Cat", &table, TranslationMode::Translate), "⠠⠉⠁⠞");
/// assert_eq!(encode_text("Cat", &table, TranslationMode::Disabled), "Cat");
/// ```
#[must_use]
pub fn encode_text(text: &str, table: &SymbolTable, mode: TranslationMode) -> String {
    if mode == TranslationMode::Disabled {
        log::trace!("mode disabled, {} octets inchangés", text.len());
        return text.to_string();
    }

    let mut items: Vec<CellItem> = Vec::new();
    let mut out = String::with_capacity(text.len() * 3);

    for segment in Segments::new(text) {
        match segment {
            Segment::Whitespace(run) => out.push_str(run),
            Segment::Word(word) => {
                items.clear();
                encode_word(word, table, mode, &mut items);
                for item in &items {
                    match *item {
                        CellItem::Code(cell) => out.push(cell.to_char()),
                        CellItem::Literal(ch) => out.push(ch),
                    }
                }
            }
        }
    }

    log::trace!(
        "{} octets encodés en {} octets (mode {})",
        text.len(),
        out.len(),
        mode.as_str()
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(text: &str, mode: TranslationMode) -> String {
        let table = SymbolTable::new();
        encode_text(text, &table, mode)
    }

    #[test]
    fn segments_concatenate_back_to_input() {
        for text in ["", "a", " ", "  a\t b ", "a b", "\n\nx\n", "é  ǿ"] {
            let rebuilt: String = Segments::new(text)
                .map(|seg| match seg {
                    Segment::Word(run) | Segment::Whitespace(run) => run,
                })
                .collect();
            assert_eq!(rebuilt, text, "{text:?}");
        }
    }

    #[test]
    fn segments_alternate_kinds() {
        let kinds: Vec<bool> = Segments::new(" a b  c")
            .map(|seg| matches!(seg, Segment::Whitespace(_)))
            .collect();
        assert_eq!(kinds, vec![true, false, true, false, true, false]);
    }

    #[test]
    fn disabled_mode_is_identity() {
        for text in ["", "Cat", "a 1 b", "€€€", "  spaced\tout  "] {
            assert_eq!(encode(text, TranslationMode::Disabled), text);
        }
    }

    #[test]
    fn empty_input_encodes_to_itself() {
        assert_eq!(encode("", TranslationMode::Translate), "");
    }

    #[test]
    fn example_word_renders_expected_cells() {
        assert_eq!(encode("Cat", TranslationMode::Translate), "⠠⠉⠁⠞");
        assert_eq!(encode("hello world", TranslationMode::Translate), "⠓⠑⠇⠇⠕ ⠺⠕⠗⠇⠙");
    }

    #[test]
    fn whitespace_runs_survive_verbatim() {
        let text = "  one\t\ttwo \n three  ";
        let encoded = encode(text, TranslationMode::Translate);
        let original_ws: Vec<&str> = Segments::new(text)
            .filter_map(|seg| match seg {
                Segment::Whitespace(run) => Some(run),
                Segment::Word(_) => None,
            })
            .collect();
        let encoded_ws: Vec<String> = Segments::new(&encoded)
            .filter_map(|seg| match seg {
                Segment::Whitespace(run) => Some(run.to_string()),
                Segment::Word(_) => None,
            })
            .collect();
        assert_eq!(encoded_ws, original_ws);
    }

    #[test]
    fn translate_output_has_no_raw_alphanumerics() {
        let encoded = encode("Mixed42Case!", TranslationMode::Translate);
        assert!(
            !encoded.chars().any(|ch| ch.is_ascii_alphanumeric()),
            "{encoded}"
        );
    }

    #[test]
    fn number_mode_resets_between_words() {
        // each word carries its own number-follows marker
        let encoded = encode("12 34", TranslationMode::Translate);
        assert_eq!(encoded, "⠼⠁⠃ ⠼⠉⠙");
    }

    #[test]
    fn unknown_character_renders_full_cell() {
        assert_eq!(encode("€", TranslationMode::Translate), "\u{283F}");
    }

    #[test]
    fn with_original_interleaves_in_rendered_string() {
        assert_eq!(
            encode("Cat", TranslationMode::TranslateWithOriginal),
            "⠠⠉C⠁a⠞t"
        );
    }

    #[test]
    fn output_length_is_cells_plus_whitespace() {
        let text = "ab  cd";
        let encoded = encode(text, TranslationMode::Translate);
        // 4 letter cells + 2 spaces
        assert_eq!(encoded.chars().count(), 6);
    }
}
