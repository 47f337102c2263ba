use std::path::PathBuf;

use crate::icon::DEFAULT_ICON;
use crate::ids::DEFAULT_ID_LENGTH;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Length of generated source ids.
    pub id_length: usize,
    /// Icon used when a URL has no recognised extension.
    pub default_icon: String,
    /// Where the upload step receives `sources.json`. `None` disables the hand-off.
    pub output_dir: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            id_length: DEFAULT_ID_LENGTH,
            default_icon: DEFAULT_ICON.to_string(),
            output_dir: None,
        }
    }
}

impl EngineConfig {
    pub fn default_with_output(output_dir: PathBuf) -> Self {
        Self {
            output_dir: Some(output_dir),
            ..Self::default()
        }
    }
}
