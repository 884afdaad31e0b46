//! Global logger. Records are echoed to stdout and kept in a bounded,
//! newest-first buffer that the log console reads every frame.
extern crate log;
use std::{
    collections::VecDeque,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex, OnceLock,
    },
};

const MAX_LINES: usize = 1000;

pub struct Logger {
    pub enabled: AtomicBool,
    pub data: Arc<Mutex<VecDeque<(String, log::Level)>>>,
}
impl Logger {
    pub fn new() -> Self {
        let data = Arc::new(Mutex::new(VecDeque::new()));

        Self {
            enabled: AtomicBool::new(true),
            data,
        }
    }
    pub fn get_color(level: log::Level) -> egui::Color32 {
        match level {
            log::Level::Error => egui::Color32::RED,
            log::Level::Warn => egui::Color32::YELLOW,
            log::Level::Info => egui::Color32::WHITE,
            log::Level::Debug => egui::Color32::DEBUG_COLOR,
            log::Level::Trace => egui::Color32::LIGHT_BLUE,
        }
    }
    /// Copies the most recent `n` lines, newest first.
    pub fn recent(&self, n: usize) -> Vec<(String, log::Level)> {
        match self.data.lock() {
            Ok(txt) => txt.iter().take(n).cloned().collect(),
            Err(_) => vec![],
        }
    }
}
impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        self.enabled.load(Ordering::Relaxed) && metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Ok(mut txt) = self.data.try_lock() {
            let t = format!(
                "{}:{} -- {}",
                record.level(),
                record.target(),
                record.args()
            );
            println!("{}", t);
            txt.push_front((t, record.level()));
            txt.truncate(MAX_LINES);
        }
    }

    fn flush(&self) {
        if let Ok(mut txt) = self.data.try_lock() {
            txt.clear();
        }
    }
}
pub static GLOBAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Installs [`GLOBAL_LOGGER`] as the `log` backend. Calling it again only
/// changes the level.
pub fn init(level: log::LevelFilter) {
    let logger = GLOBAL_LOGGER.get_or_init(Logger::new);
    // already installed by an earlier call
    let _ = log::set_logger(logger);
    log::set_max_level(level);
}

#[cfg(test)]
mod test {
    use super::*;
    use log::Log;

    fn record(logger: &Logger, level: log::Level, msg: &str) {
        logger.log(
            &log::Record::builder()
                .level(level)
                .target("wavesim")
                .args(format_args!("{}", msg))
                .build(),
        );
    }

    #[test]
    fn newest_line_comes_first() {
        log::set_max_level(log::LevelFilter::Trace);
        let logger = Logger::new();
        record(&logger, log::Level::Info, "first");
        record(&logger, log::Level::Warn, "second");
        let lines = logger.recent(10);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].0, "WARN:wavesim -- second");
        assert_eq!(lines[0].1, log::Level::Warn);
        assert_eq!(lines[1].0, "INFO:wavesim -- first");
    }

    #[test]
    fn disabled_logger_keeps_nothing() {
        let logger = Logger::new();
        logger.enabled.store(false, Ordering::Relaxed);
        record(&logger, log::Level::Error, "dropped");
        assert!(logger.recent(10).is_empty());
    }

    #[test]
    fn buffer_is_bounded() {
        log::set_max_level(log::LevelFilter::Trace);
        let logger = Logger::new();
        for i in 0..(MAX_LINES + 5) {
            record(&logger, log::Level::Error, &i.to_string());
        }
        assert_eq!(logger.recent(usize::MAX).len(), MAX_LINES);
        logger.flush();
        assert!(logger.recent(1).is_empty());
    }
}
