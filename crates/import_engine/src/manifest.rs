use std::path::{Path, PathBuf};

use import_core::PendingSource;
use import_logging::import_info;

use crate::persist::{AtomicFileWriter, PersistError};

pub const MANIFEST_FILENAME: &str = "sources.json";

/// Hands the committed sources to the upload step as a JSON array.
pub fn write_sources_manifest(
    output_dir: &Path,
    sources: &[PendingSource],
) -> Result<PathBuf, PersistError> {
    let content = serde_json::to_string_pretty(sources)?;
    let path = AtomicFileWriter::new(output_dir.to_path_buf()).write(MANIFEST_FILENAME, &content)?;
    import_info!("wrote {} source(s) to {:?}", sources.len(), path);
    Ok(path)
}
