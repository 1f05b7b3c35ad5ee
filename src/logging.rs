//! Debug logging
//!
//! The terminal is busy drawing the UI, so log output goes to a file.
//! Debug builds write `urlq.log` in the working directory; release
//! builds log nothing.

/// Initialize file logging in debug builds.
///
/// Failing to open the log file is not fatal; the app just runs without
/// logs.
#[cfg(debug_assertions)]
pub fn init() {
    use std::io::Write;

    let Ok(file) = std::fs::File::create("urlq.log") else {
        return;
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();

    log::debug!("logging initialized");
}

#[cfg(not(debug_assertions))]
pub fn init() {}
