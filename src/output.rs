use crate::error::Result;
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes `contents` to `path`, replacing any existing file.
pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(contents.as_bytes())?;
    writer.flush()?;
    info!("Wrote {} bytes to {:?}", contents.len(), path);
    Ok(())
}
