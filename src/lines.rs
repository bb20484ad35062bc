//! Incremental reassembly of newline-delimited lines from arbitrary byte chunks.
//!
//! The underlying I/O layer delivers the input as opaque chunks whose
//! boundaries carry no meaning: a chunk may end mid-line, mid-field, or even
//! mid-codepoint. [`LineSplitter`] turns that chunk stream back into logical
//! lines, holding the unterminated tail of each chunk until its closing
//! newline (or end-of-input) arrives.
//!
//! Splitting happens at the byte level against the literal `b'\n'`, so the
//! reassembled lines are byte-identical to what a whole-file read would have
//! produced; UTF-8 decoding is deferred to the record mapper.

/// Reassembles complete lines from a stream of arbitrarily-sized byte chunks.
///
/// Feed chunks in arrival order with [`feed`](Self::feed), then call
/// [`flush`](Self::flush) exactly once at end-of-input to recover a final
/// unterminated line.
///
/// Invariant: joining all emitted lines with `\n`, in emission order,
/// reproduces the input stream modulo a single optional trailing newline.
#[derive(Default)]
pub struct LineSplitter {
    /// Unterminated tail of the most recent chunk, carried to the next call.
    pending: Vec<u8>,
}

impl LineSplitter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one chunk and return every line completed by it, in order.
    ///
    /// A pending fragment from an earlier chunk is prepended to the first
    /// line. If `chunk` does not end with a newline its last segment is held
    /// back as the new pending fragment and not emitted; a chunk ending
    /// exactly on a newline leaves nothing pending.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<Vec<u8>> {
        let mut lines = Vec::new();
        let mut start = 0;
        for (i, &b) in chunk.iter().enumerate() {
            if b == b'\n' {
                let mut line = std::mem::take(&mut self.pending);
                line.extend_from_slice(&chunk[start..i]);
                lines.push(line);
                start = i + 1;
            }
        }
        self.pending.extend_from_slice(&chunk[start..]);
        lines
    }

    /// Emit the final unterminated line at end-of-input, if any.
    ///
    /// Returns `None` when the input ended on a newline (or was empty), so no
    /// spurious trailing empty line is produced. Idempotent: a second call
    /// returns `None`.
    pub fn flush(&mut self) -> Option<Vec<u8>> {
        if self.pending.is_empty() {
            None
        } else {
            Some(std::mem::take(&mut self.pending))
        }
    }
}
