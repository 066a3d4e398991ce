// src/log.rs
//
// File logger behind the `log` facade. Binaries call `init()` once;
// library code only uses the macros below, which are no-ops until then.

use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::Path,
    sync::OnceLock,
    time::Instant,
};

use env_logger::{Builder, Env, Target};

use crate::config::consts::{LOG_FILE, STORE_DIR};

static START: OnceLock<Instant> = OnceLock::new();
static INIT: OnceLock<()> = OnceLock::new();

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

pub fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

/// Install the logger. Writes to `.store/debug.log`, or stderr when the
/// file can't be opened. Safe to call more than once.
pub fn init() {
    INIT.get_or_init(|| {
        start();

        let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
        builder.format(|buf, record| {
            let elapsed = fmt_elapsed(start().elapsed().as_millis());
            writeln!(buf, "[{elapsed}][{}] {}", record.level(), record.args())
        });

        let path = Path::new(STORE_DIR).join(LOG_FILE);
        let file = fs::create_dir_all(STORE_DIR)
            .and_then(|_| OpenOptions::new().create(true).append(true).open(&path));

        match file {
            Ok(f) => {
                builder.target(Target::Pipe(Box::new(f)));
            }
            Err(e) => {
                eprintln!("Log file {} unavailable ({e}); logging to stderr", path.display());
                builder.target(Target::Stderr);
            }
        }

        // Another logger may already be installed (e.g. by a host process).
        let _ = builder.try_init();
    });
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::__log::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::__log::debug!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::__log::error!($($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::fmt_elapsed;

    #[test]
    fn elapsed_is_zero_padded() {
        assert_eq!(fmt_elapsed(0), "00:00:00.000");
        assert_eq!(fmt_elapsed(3_723_004), "01:02:03.004");
    }
}
