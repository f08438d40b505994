use std::io;

use chrono::Local;
use fern::Dispatch;
use log::LevelFilter;

pub const LOG_ENV: &str = "JSON64_LOG";

/// Level named by `value` (`off`, `error` .. `trace`, any case), `warn` when
/// unset or unrecognized.
fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Routes `log` records to stderr; stdout is reserved for the encoded output.
pub fn setup_logger() {
    let level_filter = parse_level(std::env::var(LOG_ENV).ok().as_deref());
    let detailed = level_filter >= LevelFilter::Debug;

    if let Err(e) = Dispatch::new()
        .format(move |out, message, record| {
            if detailed {
                out.finish(format_args!(
                    "[{}][{}]: {} <{}:{}>",
                    Local::now().format("%b-%d-%Y %H:%M:%S.%f"),
                    record.level(),
                    message,
                    record.file().unwrap_or("unknown_file"),
                    record.line().unwrap_or(0),
                ));
            } else {
                out.finish(format_args!("[{}]: {}", record.level(), message));
            }
        })
        .level(level_filter)
        .chain(io::stderr())
        .apply()
    {
        eprintln!("Logger initialization failed: {e}");
    }
    log::debug!("Enabled log {level_filter}.");
}
