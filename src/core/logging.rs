use console::style;
use log::{Level, LevelFilter};

use crate::types::config::{colors_enabled, config};

fn parse_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" | "warning" => LevelFilter::Warn,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

/// Route `log` records to stdout using the configured level and colors
pub fn init_logging() {
    let level = parse_level(config().log().level());
    let colors = colors_enabled();
    console::set_colors_enabled(colors);
    let verbose = level >= LevelFilter::Debug;

    let dispatch = fern::Dispatch::new()
        .format(move |out, message, record| {
            let prefix = match record.level() {
                Level::Error => Some(style("error:").red().bold()),
                Level::Warn => Some(style("warn:").yellow().bold()),
                Level::Info => None,
                Level::Debug => Some(style("debug:").dim()),
                Level::Trace => Some(style("trace:").dim()),
            };
            match (verbose, prefix) {
                (true, Some(prefix)) => out.finish(format_args!(
                    "{} {} {}",
                    chrono::Local::now().format("%H:%M:%S%.3f"),
                    prefix,
                    message
                )),
                (true, None) => out.finish(format_args!(
                    "{} {}",
                    chrono::Local::now().format("%H:%M:%S%.3f"),
                    message
                )),
                (false, Some(prefix)) => out.finish(format_args!("{} {}", prefix, message)),
                (false, None) => out.finish(format_args!("{}", message)),
            }
        })
        .level(level)
        .chain(std::io::stdout());

    // A second call (tests, embedding) keeps the first logger
    let _ = dispatch.apply();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_names_parse_leniently() {
        assert_eq!(parse_level("DEBUG"), LevelFilter::Debug);
        assert_eq!(parse_level("warning"), LevelFilter::Warn);
        assert_eq!(parse_level("off"), LevelFilter::Off);
        assert_eq!(parse_level("loud"), LevelFilter::Info);
    }
}
