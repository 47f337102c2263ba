use crate::{PendingSource, RowId, WizardStep};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WizardViewModel {
    pub step: WizardStep,
    /// Present only while step 0 is mounted.
    pub editor: Option<EditorViewModel>,
    pub sources: Vec<PendingSource>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditorViewModel {
    pub rows: Vec<RowView>,
    pub can_submit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: RowId,
    pub source_url: String,
    pub source_name: String,
    pub external_id: String,
    /// False only for the open row at the end of the list.
    pub url_required: bool,
    /// Set when the last submission rejected this row's URL.
    pub url_missing: bool,
}
