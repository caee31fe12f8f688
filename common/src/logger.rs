use std::io::Write;
use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Stream log lines go to. Interactive clients pick `Stderr` so logs stay
/// out of the board printed on stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogTarget {
    #[default]
    Stdout,
    Stderr,
}

pub struct Logger {
    prefix: Option<String>,
    target: LogTarget,
}

impl Logger {
    fn new(prefix: Option<String>, target: LogTarget) -> Self {
        Self { prefix, target }
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let entry = self.format(&timestamp, file, line, message);
        // A failed log write must never take the game down.
        let _ = match self.target {
            LogTarget::Stdout => Self::write_entry(&mut std::io::stdout().lock(), &entry),
            LogTarget::Stderr => Self::write_entry(&mut std::io::stderr().lock(), &entry),
        };
    }

    fn write_entry(out: &mut impl Write, entry: &str) -> std::io::Result<()> {
        writeln!(out, "{}", entry)?;
        out.flush()
    }

    fn format(&self, timestamp: &str, file: &str, line: u32, message: &str) -> String {
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        match self.prefix {
            Some(ref prefix) => {
                format!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message)
            }
            None => format!("[{}][{}:{}] {}", timestamp, file_name, line, message),
        }
    }
}

pub fn init_logger(prefix: Option<String>, target: LogTarget) {
    LOGGER.get_or_init(|| Logger::new(prefix, target));
}

pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    } else {
        eprintln!("Logger not initialized! Call init_logger() first.");
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}
