use std::{env, io::Write};

use chrono::Utc;
use env_logger::{Builder, Target};
use log::LevelFilter;

/// The level used when `RUST_LOG` is not set.
#[must_use]
pub fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        // The quiz shares the terminal with the log, keep it quiet.
        LevelFilter::Warn
    }
}

pub fn init_logger(verbose: bool) {
    let mut builder = Builder::new();
    builder.target(Target::Stderr);

    builder.format(|formatter, record| {
        writeln!(
            formatter,
            "{} [{}] ({}): {}",
            Utc::now().format("%Y-%m-%d %H:%M:%S %z"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    if let Ok(var) = env::var("RUST_LOG") {
        builder.parse_filters(&var);
    } else {
        builder.filter(None, default_level(verbose));
    }

    builder.init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_logs_debug() {
        assert_eq!(default_level(true), LevelFilter::Debug);
        assert_eq!(default_level(false), LevelFilter::Warn);
    }
}
