//! Logger setup for the global `--quiet`, `--verbose` and `--logfile` flags.
//!
//! Progress goes to stdout; warnings and errors go to stderr. Both are
//! copied to the log file when one is given.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

use env_logger::fmt::Formatter;
use env_logger::{Builder, Logger, Target};
use log::{Level, LevelFilter, Log, Metadata, Record};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use crate::error::CliError;

type SharedFile = Arc<Mutex<File>>;

/// Writes to a console stream and, if set, to a log file with ANSI codes
/// stripped.
struct Tee<W: Write> {
    console: W,
    file: Option<SharedFile>,
}

impl<W: Write> Write for Tee<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.console.write_all(buf)?;
        if let Some(file) = &self.file {
            let mut file = file
                .lock()
                .map_err(|_| io::Error::other("log file lock poisoned"))?;
            file.write_all(&strip_ansi_escapes::strip(buf))?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.console.flush()?;
        if let Some(file) = &self.file {
            file.lock()
                .map_err(|_| io::Error::other("log file lock poisoned"))?
                .flush()?;
        }
        Ok(())
    }
}

/// Routes warnings and errors to one logger, everything else to another.
struct SplitLogger {
    out: Logger,
    err: Logger,
}

impl Log for SplitLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        self.out.enabled(metadata)
    }

    fn log(&self, record: &Record<'_>) {
        if record.level() <= Level::Warn {
            self.err.log(record);
        } else {
            self.out.log(record);
        }
    }

    fn flush(&self) {
        self.out.flush();
        self.err.flush();
    }
}

pub(crate) fn level_filter(quiet: bool, verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    }
}

fn format_record(buf: &mut Formatter, record: &Record<'_>, verbose: bool) -> io::Result<()> {
    if verbose {
        return writeln!(
            buf,
            "[{} {:<5} {}] {}",
            buf.timestamp_millis(),
            record.level(),
            record.target(),
            record.args()
        );
    }
    match record.level() {
        Level::Error => writeln!(
            buf,
            "{} {}",
            "error:".if_supports_color(Stderr, |t| t.red()),
            record.args()
        ),
        Level::Warn => writeln!(
            buf,
            "{} {}",
            "warning:".if_supports_color(Stderr, |t| t.yellow()),
            record.args()
        ),
        _ => writeln!(buf, "{}", record.args()),
    }
}

fn build_logger(filter: LevelFilter, verbose: bool, target: Box<dyn Write + Send>) -> Logger {
    Builder::new()
        .filter_level(filter)
        .target(Target::Pipe(target))
        .format(move |buf, record| format_record(buf, record, verbose))
        .build()
}

fn split_logger(
    filter: LevelFilter,
    verbose: bool,
    out: Box<dyn Write + Send>,
    err: Box<dyn Write + Send>,
) -> SplitLogger {
    SplitLogger {
        out: build_logger(filter, verbose, out),
        err: build_logger(filter, verbose, err),
    }
}

/// Install the global logger. `--verbose` wins over `--quiet`.
pub(crate) fn init(quiet: bool, verbose: bool, logfile: Option<&Path>) -> Result<(), CliError> {
    let file = logfile
        .map(|path| {
            File::create(path)
                .map_err(|e| CliError::logging(format!("cannot create {}: {e}", path.display())))
        })
        .transpose()?
        .map(|file| Arc::new(Mutex::new(file)));

    let filter = level_filter(quiet, verbose);
    let logger = split_logger(
        filter,
        verbose,
        Box::new(Tee {
            console: io::stdout(),
            file: file.clone(),
        }),
        Box::new(Tee {
            console: io::stderr(),
            file,
        }),
    );

    log::set_boxed_logger(Box::new(logger)).map_err(|e| CliError::logging(e.to_string()))?;
    log::set_max_level(filter);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_level_filter() {
        assert_eq!(level_filter(false, false), LevelFilter::Info);
        assert_eq!(level_filter(true, false), LevelFilter::Warn);
        assert_eq!(level_filter(true, true), LevelFilter::Debug);
    }

    #[test]
    fn test_tee_strips_ansi_from_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("run.log");
        let mut tee = Tee {
            console: Vec::new(),
            file: Some(Arc::new(Mutex::new(File::create(&path).unwrap()))),
        };

        tee.write_all(b"\x1b[32mWrote\x1b[0m out.json\n").unwrap();
        tee.flush().unwrap();

        assert_eq!(tee.console, b"\x1b[32mWrote\x1b[0m out.json\n");
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Wrote out.json\n");
    }

    #[test]
    fn test_warnings_and_errors_go_to_err_stream() {
        let out = Captured::default();
        let err = Captured::default();
        let logger = split_logger(
            LevelFilter::Info,
            false,
            Box::new(out.clone()),
            Box::new(err.clone()),
        );

        logger.log(&Record::builder().level(Level::Info).args(format_args!("Wrote a.json")).build());
        logger.log(&Record::builder().level(Level::Warn).args(format_args!("unknown set")).build());
        logger.log(&Record::builder().level(Level::Error).args(format_args!("disk full")).build());
        logger.flush();

        assert_eq!(out.text(), "Wrote a.json\n");
        let err = err.text();
        assert!(err.contains("unknown set"));
        assert!(err.contains("disk full"));
        assert!(!err.contains("Wrote"));
    }
}
