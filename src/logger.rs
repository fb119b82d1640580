use colored::{ColoredString, Colorize};
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};

// Log records go to stderr so stdout only carries the register assignment.
// Records look like "LEVEL - target - message"; per-pass coloring traces stop at Debug.
struct StderrLogger;

fn target_ceiling(target: &str) -> Level {
    match target {
        "regcolor_lib::register_allocation::greedy" => Level::Debug,
        _ => Level::Trace,
    }
}

fn paint(level: Level, line: String) -> ColoredString {
    match level {
        Level::Error => line.red(),
        Level::Warn => line.purple(),
        Level::Info => line.blue(),
        Level::Debug | Level::Trace => line.normal(),
    }
}

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= target_ceiling(metadata.target())
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!(
            "{} - {} - {}",
            record.level(),
            record.target(),
            record.args()
        );
        eprintln!("{}", paint(record.level(), line));
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Installs the logger with the given maximum level. Fails if a logger is already set.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}
