//! # Geoflow
//!
//! A **streaming converter** that turns a large tab-separated GeoNames city
//! dump into a filtered, well-formed JSON array while keeping memory use
//! bounded regardless of file size.
//!
//! ## Key features
//!
//! - **Bounded memory** - input is consumed in fixed-size chunks; only one
//!   pending line and one held output element live between reads
//! - **Chunk-safe line reassembly** - logical lines are reconstructed
//!   byte-identically across arbitrary chunk boundaries
//! - **Open predicate composition** - filters are independent [`Predicate`]s
//!   chained as a short-circuiting conjunction
//! - **Incremental JSON output** - a one-element lookahead writes a valid
//!   array with no trailing comma and no full-result buffering
//! - **Lossy-but-total parsing** - malformed numeric fields degrade to null
//!   rather than aborting the run
//!
//! ## Quick start
//!
//! ```
//! use geoflow::{pipeline, FilterConfig};
//!
//! # fn main() -> anyhow::Result<()> {
//! let input = "2988507\tParis\tParis\t\t48.85\t2.35\t\t\tFR\t\t\t\t\t\t12000000\t35\tEurope/Paris\n";
//! let mut output = Vec::new();
//!
//! let chain = FilterConfig {
//!     min_population: 5_000_000,
//!     allowed_countries: vec![],
//! }
//! .into_chain();
//!
//! let stats = pipeline::run(input.as_bytes(), &mut output, &chain)?;
//! assert_eq!(stats.cities_kept, 1);
//! assert!(output.starts_with(b"[\n"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Pipeline shape
//!
//! [`pipeline::run`] wires the stages into one forward-only chain:
//!
//! ```text
//! bytes → LineSplitter → City::from_line → FilterChain → ArrayWriter → sink
//! ```
//!
//! Each stage is independently usable and unit-testable; see the module docs
//! for contracts and edge cases.

pub mod error;
pub mod filter;
pub mod lines;
pub mod metrics;
pub mod pipeline;
pub mod record;
pub mod serializer;

pub use error::PipelineError;
pub use filter::{
    CountryAllowList, FilterChain, FilterConfig, MinPopulation, Predicate,
    DEFAULT_POPULATION_LIMIT,
};
pub use lines::LineSplitter;
pub use metrics::RunStats;
pub use record::City;
pub use serializer::ArrayWriter;
