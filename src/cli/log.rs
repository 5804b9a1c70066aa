//! Logging setup for the command line.
//!
//! Log lines go to stderr. Global verbosity comes from `-v` (repeatable),
//! and `-l COMPONENT[=LEVEL]` raises a single component (defaults to trace).

use colored::*;
use log::{Level, LevelFilter};
use time::macros::format_description;
use time::OffsetDateTime;

const CRATE: &str = "yaml_stream";

fn verbosity_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn colored_level(level: Level) -> ColoredString {
    match level {
        Level::Error => "ERROR".bright_red(),
        Level::Warn => "WARN ".yellow(),
        Level::Info => "INFO ".green(),
        Level::Debug => "DEBUG".blue(),
        Level::Trace => "TRACE".dimmed(),
    }
}

/// Parse a `COMPONENT[=LEVEL]` spec into a module path and a level.
///
/// Bare component names are resolved inside this crate, so `stream` targets
/// `yaml_stream::stream`.
fn parse_component(spec: &str) -> Result<(String, LevelFilter), String> {
    let (component, level) = match spec.split_once('=') {
        Some((c, l)) => {
            let level = l
                .trim()
                .parse::<LevelFilter>()
                .map_err(|_| format!("Invalid log level '{}' for '{}'", l.trim(), c.trim()))?;
            (c.trim(), level)
        }
        None => (spec, LevelFilter::Trace),
    };
    if component.is_empty() {
        return Err(format!("Invalid log spec '{}': missing component", spec));
    }
    let target = if component.contains("::") || component == CRATE {
        component.to_string()
    } else {
        format!("{}::{}", CRATE, component)
    };
    Ok((target, level))
}

fn timestamp() -> String {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    now.format(format_description!(
        "[hour]:[minute]:[second].[subsecond digits:3]"
    ))
    .unwrap_or_default()
}

pub fn setup(verbose: u8, logs: Vec<&str>, log_time: bool) -> Result<(), String> {
    let mut dispatch = fern::Dispatch::new()
        .format(move |out, message, record| {
            let prefix = if log_time {
                format!("{} ", timestamp().dimmed())
            } else {
                String::new()
            };
            out.finish(format_args!(
                "{}{} [{}] {}",
                prefix,
                colored_level(record.level()),
                record.target(),
                message
            ))
        })
        .level(verbosity_level(verbose));

    for spec in logs {
        let (target, level) = parse_component(spec)?;
        dispatch = dispatch.level_for(target, level);
    }

    dispatch
        .chain(std::io::stderr())
        .apply()
        .map_err(|e| format!("Failed to setup logging: {}", e))
}
