/// Braille encoding engine for braillify.
///
/// Converts plain text to six-dot braille cell sequences, word by word,
/// with number-mode and capitalization marking.
pub mod text;
pub mod word;

pub use text::{Segment, Segments, encode_text};
pub use word::{CellItem, encode_word};
