use std::io::Write;

use env_logger::Builder;
use log::LevelFilter;

/// Route `log` macros to stderr as `[LEVEL] message` lines.
///
/// Debug messages are shown only in debug mode. `RUST_LOG`, when set,
/// overrides the level chosen here.
pub fn init(debug_mode: bool) {
    let mut builder = Builder::new();
    builder
        .filter_level(level_for(debug_mode))
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()));

    // A logger may already be installed (tests, embedding binaries); keep it.
    let _ = builder.try_init();
}

fn level_for(debug_mode: bool) -> LevelFilter {
    if debug_mode {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}
