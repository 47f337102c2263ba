use serde::{Deserialize, Serialize};

use crate::row::{is_blank, DraftRow};

/// Processing status of a committed source. Step 0 only ever produces `Waiting`;
/// the later steps move it forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreateStatus {
    #[default]
    Waiting,
    Creating,
    Finish,
}

/// A committed external file, handed to the processing and upload steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingSource {
    pub id: String,
    pub create_status: CreateStatus,
    pub source_name: String,
    pub icon: String,
    pub external_id: String,
    pub source_url: String,
}

/// Produces tokens that do not collide within the lifetime of the process.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Maps a source URL to an icon identifier. Must be total.
pub trait IconResolver: Send + Sync {
    fn resolve(&self, source_url: &str) -> String;
}

/// Turns draft rows into committed sources, preserving order.
///
/// Rows whose URL is blank produce nothing; every other row produces
/// exactly one record with a fresh id.
pub fn build_pending_sources(
    rows: &[DraftRow],
    ids: &dyn IdGenerator,
    icons: &dyn IconResolver,
) -> Vec<PendingSource> {
    rows.iter()
        .filter(|row| !is_blank(&row.source_url))
        .map(|row| PendingSource {
            id: ids.generate(),
            create_status: CreateStatus::Waiting,
            source_name: if is_blank(&row.source_name) {
                row.source_url.clone()
            } else {
                row.source_name.clone()
            },
            icon: icons.resolve(&row.source_url),
            external_id: row.external_id.clone(),
            source_url: row.source_url.clone(),
        })
        .collect()
}
