#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

pub use color_eyre::eyre;
pub use morph_testhelpers_macros::test;

use log::{Level, LevelFilter, Log, Metadata, Record};
use owo_colors::{OwoColorize, Style};
use std::io::Write;
use std::sync::Once;

struct StderrLogger;

impl StderrLogger {
    fn level_style(level: Level) -> Style {
        match level {
            Level::Error => Style::new().red().bold(),
            Level::Warn => Style::new().yellow(),
            Level::Info => Style::new().green(),
            Level::Debug => Style::new().blue(),
            Level::Trace => Style::new().cyan(),
        }
    }
}

impl Log for StderrLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        eprintln!(
            "{:>5} {} {}",
            record.level().style(Self::level_style(record.level())),
            record.module_path().unwrap_or(record.target()).dimmed(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Installs the color-eyre report handler (except on miri) and the stderr
/// logger. Only the first call does anything.
pub fn setup() {
    static SETUP: Once = Once::new();
    SETUP.call_once(|| {
        #[cfg(not(miri))]
        install_eyre_hook();

        // another logger may already be installed by the test itself
        if log::set_boxed_logger(Box::new(StderrLogger)).is_ok() {
            log::set_max_level(LevelFilter::Trace);
        }
    });
}

#[cfg(not(miri))]
fn install_eyre_hook() {
    use color_eyre::config::{Frame, HookBuilder};
    use regex::Regex;
    use std::sync::LazyLock;

    /// Frames from the panic machinery and the test harness, which never
    /// tell anything about the failure.
    static IGNORE_FRAMES: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"^(std::panic|core::panic|test::run_test|test::__rust_begin_short_backtrace|std::sys::(pal|backtrace)|std::thread::Builder|core::ops::function|<alloc::boxed::Box<F,A> as core::ops::function::FnOnce<Args>>::call_once)")
            .expect("frame filter regex is valid")
    });

    let filter = |frames: &mut Vec<&Frame>| {
        frames.retain(|frame| {
            frame
                .name
                .as_ref()
                .is_none_or(|name| !IGNORE_FRAMES.is_match(&name.to_string()))
        });
    };

    // the only error is `eyre::InstallError`: a hook is already installed
    let _ = HookBuilder::default()
        .add_frame_filter(Box::new(filter))
        .install();
}
