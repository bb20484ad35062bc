//! Error taxonomy for a pipeline run.
//!
//! Only I/O failures escape the pipeline. Malformed field data is absorbed at
//! the record mapper (numeric parse failures degrade to absent values and the
//! record flows through filtering normally), so there is deliberately no
//! variant for it here. Read-side and write-side failures are distinct
//! variants so a caller can tell "couldn't read the source" from "couldn't
//! persist the result".

use thiserror::Error;

/// Fatal, run-terminating failures. No automatic retry: transient I/O errors
/// are reported, not retried, consistent with a single-pass batch conversion.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The input byte source failed; the output JSON structure is left
    /// unclosed and accumulated counts are not meaningful.
    #[error("failed to read input stream")]
    Read(#[source] std::io::Error),

    /// The output byte sink failed or stopped accepting bytes.
    #[error("failed to write output stream")]
    Write(#[source] std::io::Error),
}
