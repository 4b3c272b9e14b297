use log::{LevelFilter, Log, Metadata, Record};

/// Writes `LEVEL - message` lines to stderr so the board on stdout stays clean.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

pub fn init(level: LevelFilter) {
    // a logger may already be installed when running under tests
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
