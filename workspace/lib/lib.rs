//! Shared plumbing for the scripts in `src/`: logger setup and CSV output.

use std::{ fs, path::Path };
use anyhow::{ bail, Result };
use ndarray as nd;
use simplelog::{
    ColorChoice,
    CombinedLogger,
    Config,
    LevelFilter,
    TermLogger,
    TerminalMode,
};

/// Parse a log level name, defaulting to `Info` if none is given.
pub fn log_level(name: Option<&str>) -> Result<LevelFilter> {
    let level
        = match name.map(str::to_lowercase).as_deref() {
            None => LevelFilter::Info,
            Some("debug") => LevelFilter::Debug,
            Some("info") => LevelFilter::Info,
            Some("warn") => LevelFilter::Warn,
            Some("error") => LevelFilter::Error,
            Some(other) => bail!("log level must be debug, info, warn or error; got {other}"),
        };
    Ok(level)
}

/// Install a terminal logger at the level named by the first command-line
/// argument.
pub fn init_logger() -> Result<()> {
    let arg = std::env::args().nth(1);
    let level = log_level(arg.as_deref())?;
    CombinedLogger::init(vec![
        TermLogger::new(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto),
    ])?;
    Ok(())
}

/// Create a directory and all of its parents if they don't already exist.
pub fn mkdir<P: AsRef<Path>>(path: P) -> Result<()> {
    fs::create_dir_all(path)?;
    Ok(())
}

/// Write equal-length columns to a CSV file under the given headers.
pub fn write_columns<P, S>(path: P, headers: &[String], columns: &[nd::ArrayBase<S, nd::Ix1>])
    -> Result<()>
where
    P: AsRef<Path>,
    S: nd::Data<Elem = f64>,
{
    if headers.len() != columns.len() {
        bail!("got {} headers for {} columns", headers.len(), columns.len());
    }
    let n = columns.first().map(|c| c.len()).unwrap_or(0);
    if columns.iter().any(|c| c.len() != n) {
        bail!("columns must all have the same length");
    }
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(headers)?;
    for k in 0..n {
        writer.write_record(columns.iter().map(|c| c[k].to_string()))?;
    }
    writer.flush()?;
    Ok(())
}
