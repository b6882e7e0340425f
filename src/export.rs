use std::io::ErrorKind;
use std::path::Path;

use tokio::{fs::OpenOptions, io::AsyncWriteExt};

use crate::{parse::UpvotedRecord, Error, Result};

/// Refuses to go on when `path` exists and overwriting was not asked for.
/// Runs before any prompting or network traffic.
pub fn ensure_writable(path: &Path, overwrite: bool) -> Result<()> {
    if !overwrite && path.exists() {
        return Err(Error::OutputExists(path.to_path_buf()));
    }
    Ok(())
}

/// Writes the records as a pretty printed JSON array (2-space indent, UTF-8 kept as is).
/// Without `overwrite` the file is created exclusively, so a file that showed up
/// during the run is left alone.
pub async fn export_json(records: &[UpvotedRecord], path: &Path, overwrite: bool) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(records)?;

    let mut options = OpenOptions::new();
    options.write(true);
    if overwrite {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }

    let mut file = match options.open(path).await {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            return Err(Error::OutputExists(path.to_path_buf()))
        }
        Err(e) => return Err(e.into()),
    };
    file.write_all(&bytes).await?;
    file.flush().await?;
    Ok(())
}
