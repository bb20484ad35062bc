//! File-to-file entry point.
//!
//! Usage: `geoflow <input.txt> <output.json> [min-population] [CC,CC,...]`
//!
//! Argument handling is deliberately minimal; the conversion itself lives in
//! the library.

use anyhow::{bail, Context, Result};
use geoflow::{pipeline, FilterConfig, DEFAULT_POPULATION_LIMIT};
use std::fs::File;
use std::io::{BufReader, BufWriter};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (input, output) = match args.as_slice() {
        [input, output, ..] => (input, output),
        _ => bail!("usage: geoflow <input.txt> <output.json> [min-population] [CC,CC,...]"),
    };

    let min_population = match args.get(2) {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("invalid min-population {raw:?}"))?,
        None => DEFAULT_POPULATION_LIMIT,
    };
    let allowed_countries: Vec<String> = match args.get(3) {
        Some(raw) => raw.split(',').map(str::to_string).collect(),
        None => Vec::new(),
    };

    let config = FilterConfig {
        min_population,
        allowed_countries,
    };
    log::info!("converting {input} -> {output} with {config:?}");

    let reader = BufReader::new(File::open(input).with_context(|| format!("open {input}"))?);
    let writer = BufWriter::new(File::create(output).with_context(|| format!("create {output}"))?);

    let stats = pipeline::run(reader, writer, &config.into_chain())
        .with_context(|| format!("convert {input} -> {output}"))?;

    println!("{stats}");
    Ok(())
}
