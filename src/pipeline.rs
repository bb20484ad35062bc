//! The pipeline driver: wires the stages into one forward-only chain.
//!
//! `bytes → lines → records → filtered records → serialized bytes → sink`,
//! single-threaded and push-based. Each stage processes one unit to
//! completion before the next unit is read, so memory use stays bounded by
//! the chunk size plus one pending line and one held output element.
//! Backpressure comes for free from the blocking [`Write`] sink: the read
//! loop does not advance while a write is in flight.

use crate::error::PipelineError;
use crate::filter::FilterChain;
use crate::lines::LineSplitter;
use crate::metrics::RunStats;
use crate::record::City;
use crate::serializer::ArrayWriter;
use std::io::{Read, Write};
use std::time::Instant;

/// Read granularity for the input source.
const CHUNK_SIZE: usize = 64 * 1024;

/// Run the full conversion: stream `reader` through line reassembly, record
/// mapping, the filter chain, and incremental array serialization into
/// `writer`.
///
/// The opening bracket is written before the first read, so an error partway
/// through leaves an unterminated array in the sink. The first I/O error
/// halts the run; read and write failures are reported as distinct
/// [`PipelineError`] variants. Malformed field data never causes an error
/// here: it degrades to absent values inside [`City::from_line`] and is then
/// (for population) rejected by the filter chain like any other record.
///
/// # Errors
/// [`PipelineError::Read`] if the source fails, [`PipelineError::Write`] if
/// the sink fails.
pub fn run<R: Read, W: Write>(
    mut reader: R,
    writer: W,
    filters: &FilterChain,
) -> Result<RunStats, PipelineError> {
    let started = Instant::now();
    let mut splitter = LineSplitter::new();
    let mut out = ArrayWriter::new(writer).map_err(PipelineError::Write)?;
    let mut lines_total: u64 = 0;
    let mut cities_kept: u64 = 0;

    let mut buf = vec![0u8; CHUNK_SIZE];
    loop {
        let n = reader.read(&mut buf).map_err(PipelineError::Read)?;
        if n == 0 {
            break;
        }
        for line in splitter.feed(&buf[..n]) {
            process_line(&line, filters, &mut out, &mut lines_total, &mut cities_kept)?;
        }
    }
    if let Some(line) = splitter.flush() {
        process_line(&line, filters, &mut out, &mut lines_total, &mut cities_kept)?;
    }

    out.finish().map_err(PipelineError::Write)?;

    let stats = RunStats {
        lines_total,
        cities_kept,
        elapsed: started.elapsed(),
    };
    log::debug!(
        "pipeline done: {} of {} lines kept in {:?}",
        stats.cities_kept,
        stats.lines_total,
        stats.elapsed
    );
    Ok(stats)
}

fn process_line<W: Write>(
    line: &[u8],
    filters: &FilterChain,
    out: &mut ArrayWriter<W>,
    lines_total: &mut u64,
    cities_kept: &mut u64,
) -> Result<(), PipelineError> {
    *lines_total += 1;
    // Lossy decode: encoding damage stays confined to the affected fields.
    let city = City::from_line(&String::from_utf8_lossy(line));
    if filters.accept(&city) {
        out.push(&city).map_err(PipelineError::Write)?;
        *cities_kept += 1;
    } else {
        log::trace!("dropped line {}: {:?}", lines_total, city.name);
    }
    Ok(())
}
