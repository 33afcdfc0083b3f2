use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use br_core::mode::TranslationMode;
use br_core::table::SymbolTable;
use br_core::traits::{SegmentSink, SegmentSource};
use br_encode::encode_text;

/// Source de segments ligne à ligne, fin de ligne comprise.
///
/// Chaque ligne est un segment indépendant ; la concaténation des segments
/// reproduit l'entrée.
pub struct LineSource<R> {
    reader: R,
}

impl<R: BufRead + Send> LineSource<R> {
    /// Wrap a buffered reader.
    pub const fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead + Send> SegmentSource for LineSource<R> {
    fn next_segment(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .context("lecture de l'entrée")?;
        Ok((read > 0).then_some(line))
    }
}

/// Sink écrivant chaque segment encodé dans un writer.
pub struct WriterSink<W> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    /// Wrap a writer.
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Flush and hand back the underlying writer.
    ///
    /// # Errors
    /// Returns an error if the final flush fails.
    pub fn finish(mut self) -> Result<W> {
        self.writer.flush().context("flush de la sortie")?;
        Ok(self.writer)
    }
}

impl<W: Write> SegmentSink for WriterSink<W> {
    fn accept(&mut self, encoded: &str) -> Result<()> {
        self.writer
            .write_all(encoded.as_bytes())
            .context("écriture d'un segment encodé")
    }
}

/// Fait passer chaque segment de la source par l'encodeur, dans l'ordre, et
/// pousse le rendu vers le sink. En mode `Disabled` les segments traversent
/// inchangés (géré par `encode_text`).
///
/// # Errors
/// Propagates source read failures and sink write failures.
pub fn run<S, K>(mut source: S, sink: &mut K, table: &SymbolTable, mode: TranslationMode) -> Result<()>
where
    S: SegmentSource,
    K: SegmentSink,
{
    let mut segments = 0u64;
    while let Some(segment) = source.next_segment()? {
        sink.accept(&encode_text(&segment, table, mode))?;
        segments += 1;
    }
    log::debug!("{segments} segments encodés (mode {})", mode.as_str());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_on(input: &str, mode: TranslationMode) -> String {
        let table = SymbolTable::new();
        let source = LineSource::new(input.as_bytes());
        let mut sink = WriterSink::new(Vec::new());
        run(source, &mut sink, &table, mode).unwrap();
        String::from_utf8(sink.finish().unwrap()).unwrap()
    }

    #[test]
    fn line_source_preserves_line_endings() {
        let mut source = LineSource::new("a\nb\n\nc".as_bytes());
        let mut collected = String::new();
        while let Some(segment) = source.next_segment().unwrap() {
            collected.push_str(&segment);
        }
        assert_eq!(collected, "a\nb\n\nc");
    }

    /// Reader yielding one full line, then failing.
    struct FailingRead {
        sent: bool,
    }

    impl std::io::Read for FailingRead {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            if self.sent {
                return Err(std::io::Error::other("périphérique débranché"));
            }
            self.sent = true;
            let data = b"ok\n";
            buf[..data.len()].copy_from_slice(data);
            Ok(data.len())
        }
    }

    #[test]
    fn mid_stream_read_error_surfaces_instead_of_truncating() {
        let table = SymbolTable::new();
        let source = LineSource::new(std::io::BufReader::new(FailingRead { sent: false }));
        let mut sink = WriterSink::new(Vec::new());
        let result = run(source, &mut sink, &table, TranslationMode::Translate);
        assert!(result.is_err());
        // the line read before the failure was still encoded in order
        let written = String::from_utf8(sink.finish().unwrap()).unwrap();
        assert_eq!(written, "⠕⠅\n");
    }

    #[test]
    fn pipeline_encodes_each_line_in_order() {
        assert_eq!(run_on("cat\nhat\n", TranslationMode::Translate), "⠉⠁⠞\n⠓⠁⠞\n");
    }

    #[test]
    fn pipeline_disabled_is_identity() {
        let text = "Cat 42\n  spaced\n";
        assert_eq!(run_on(text, TranslationMode::Disabled), text);
    }

    #[test]
    fn pipeline_keeps_blank_lines() {
        assert_eq!(run_on("a\n\nb", TranslationMode::Translate), "⠁\n\n⠃");
    }
}
