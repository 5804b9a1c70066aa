mod def;
include!(concat!(env!("OUT_DIR"), "/build_info.rs"));
use clap::Parser;
use std::io::Write;
use yaml_stream::{Error, ReadOptions, Segments, Stream};

pub mod log;

fn write_stdout(bytes: &[u8]) -> Result<(), String> {
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(bytes)
        .and_then(|_| stdout.flush())
        .map_err(|e| format!("Failed to write output: {}", e))
}

/// Report an index past the last document. Returns `Ok(false)` so the
/// caller exits with a failure status without touching the stream.
fn reject_index(index: usize, count: usize, quiet: bool) -> Result<bool, String> {
    if !quiet {
        eprintln!("{}", Error::Index { index, count });
    }
    Ok(false)
}

pub fn run() -> Result<bool, String> {
    let cli = def::Args::parse();

    // Split log strings upon comma, trim them and flatten all in
    // `logs`, remove empty values
    let logs = cli.log.unwrap_or_default();
    let logs = logs
        .iter()
        .flat_map(|log| log.split(','))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<&str>>();

    log::setup(cli.verbose, logs, cli.log_time)?;

    if cli.color && cli.no_color {
        return Err("Cannot use both --color and --no-color".to_string());
    }
    if cli.color {
        colored::control::set_override(true);
    }
    if cli.no_color {
        colored::control::set_override(false);
    }

    if cli.version {
        println!("version: {}", env!("CARGO_PKG_VERSION"));
        println!("Rust: {}", RUSTC_VERSION);
        println!("target: {}", TARGET);
        return Ok(true);
    }

    let filename = cli
        .filename
        .ok_or_else(|| "filename is a required flag.".to_string())?;

    if cli.raw {
        let mut segments = Segments::new();
        segments.read_file(&filename).map_err(|e| e.to_string())?;
        ::log::debug!("{} segment(s) in '{}'", segments.count(), filename);

        if cli.count {
            println!("{}", segments.count());
            return Ok(true);
        }
        if cli.all {
            write_stdout(&segments.bytes())?;
            return Ok(true);
        }
        if cli.index > segments.count() - 1 {
            return reject_index(cli.index, segments.count(), cli.quiet);
        }
        write_stdout(&segments[cli.index])?;
        return Ok(true);
    }

    let mut stream = Stream::with_options(ReadOptions { mode: cli.mode });
    stream.read_file(&filename).map_err(|e| e.to_string())?;
    ::log::debug!("{} document(s) in '{}'", stream.count(), filename);

    if cli.count {
        println!("{}", stream.count());
        return Ok(true);
    }
    if cli.all {
        print!("{}", stream);
        return Ok(true);
    }
    if cli.index > stream.count() - 1 {
        return reject_index(cli.index, stream.count(), cli.quiet);
    }
    print!("{}", stream[cli.index]);
    Ok(true)
}
