//! Incremental JSON array serialization with one-element lookahead.
//!
//! The output is a syntactically valid JSON array written element by element:
//! two-space indent, one object per line, comma after every line except the
//! last, `[` / `]` on their own lines. Nothing resembling the full result is
//! ever buffered; the only held state is the single most recent element,
//! kept back so the comma decision can be made when the next element (or the
//! end of the stream) arrives.

use crate::record::City;
use std::io::{self, Write};

/// Streams a sequence of [`City`] records to a sink as one JSON array.
///
/// The opening bracket is written eagerly at construction, before any input
/// has been read, so a failure mid-run leaves a syntactically incomplete
/// file behind. That is an accepted limitation of the single-pass design.
pub struct ArrayWriter<W: Write> {
    sink: W,
    /// Serialized but unwritten most recent element (the lookahead slot).
    held: Option<String>,
    written: usize,
}

impl<W: Write> ArrayWriter<W> {
    /// Open the array: writes `[` and a newline to the sink immediately.
    pub fn new(mut sink: W) -> io::Result<Self> {
        sink.write_all(b"[\n")?;
        Ok(Self {
            sink,
            held: None,
            written: 0,
        })
    }

    /// Accept the next record.
    ///
    /// The previously held element, if any, is flushed with a trailing comma;
    /// the new record is serialized and held until [`finish`](Self::finish)
    /// or the next push decides its line ending.
    pub fn push(&mut self, city: &City) -> io::Result<()> {
        if let Some(prev) = self.held.take() {
            writeln!(self.sink, "  {prev},")?;
            self.written += 1;
        }
        let json = serde_json::to_string(city).map_err(io::Error::other)?;
        self.held = Some(json);
        Ok(())
    }

    /// Close the array and return the sink.
    ///
    /// The held element, if any, is written without a trailing comma, then
    /// the closing bracket. Zero pushes yield exactly `[\n]\n`. The sink is
    /// flushed before being handed back.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(last) = self.held.take() {
            writeln!(self.sink, "  {last}")?;
            self.written += 1;
        }
        self.sink.write_all(b"]\n")?;
        self.sink.flush()?;
        Ok(self.sink)
    }

    /// Number of elements fully written to the sink so far (excludes the
    /// held element).
    pub fn written(&self) -> usize {
        self.written
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::City;

    fn city(id: u64) -> City {
        City::from_line(&format!("{id}\tCity{id}\tCity{id}"))
    }

    fn render(count: u64) -> String {
        let mut w = ArrayWriter::new(Vec::new()).unwrap();
        for id in 0..count {
            w.push(&city(id)).unwrap();
        }
        String::from_utf8(w.finish().unwrap()).unwrap()
    }

    #[test]
    fn empty_array_is_bracket_pair_on_two_lines() {
        assert_eq!(render(0), "[\n]\n");
    }

    #[test]
    fn single_element_has_no_comma() {
        let out = render(1);
        assert!(out.starts_with("[\n  {\"id\":0,"));
        assert!(out.ends_with("}\n]\n"));
        assert_eq!(out.matches("},\n").count(), 0);
    }

    #[test]
    fn n_elements_have_n_minus_one_commas_and_parse_back() {
        for n in [0u64, 1, 2, 5] {
            let out = render(n);
            assert_eq!(out.matches("},\n").count(), (n as usize).saturating_sub(1));
            let parsed: Vec<serde_json::Value> = serde_json::from_str(&out).unwrap();
            assert_eq!(parsed.len(), n as usize);
        }
    }

    #[test]
    fn elements_are_indented_two_spaces_one_per_line() {
        let out = render(3);
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("["));
        for _ in 0..3 {
            let line = lines.next().unwrap();
            assert!(line.starts_with("  {"));
        }
        assert_eq!(lines.next(), Some("]"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn opening_bracket_is_written_eagerly() {
        let mut sink = Vec::new();
        {
            let w = ArrayWriter::new(&mut sink).unwrap();
            drop(w);
        }
        assert_eq!(sink, b"[\n");
    }
}
