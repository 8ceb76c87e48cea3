// src/utils/mod.rs
use log::LevelFilter;

pub mod timing;

/// Routes `log` records to stdout as `[LEVEL][target] message`.
pub fn setup_logging(level: LevelFilter) -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}] {}",
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()?;
    Ok(())
}

/// Maps `-v` occurrences onto a level, starting from `base`.
pub fn verbosity_level(base: LevelFilter, verbose: u8) -> LevelFilter {
    match verbose {
        0 => base,
        1 => base.max(LevelFilter::Debug),
        _ => LevelFilter::Trace,
    }
}
