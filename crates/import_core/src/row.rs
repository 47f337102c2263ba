use std::fmt;

/// Identity assigned to a draft row when it is created.
///
/// Never reused within an editor and never derived from the row's position,
/// so removing other rows leaves it untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowId(pub u64);

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row-{}", self.0)
    }
}

/// One editable entry of the external-URL list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftRow {
    pub id: RowId,
    pub source_url: String,
    pub source_name: String,
    pub external_id: String,
}

impl DraftRow {
    pub fn blank(id: RowId) -> Self {
        Self {
            id,
            source_url: String::new(),
            source_name: String::new(),
            external_id: String::new(),
        }
    }

    pub(crate) fn apply(&mut self, patch: RowPatch) {
        if let Some(url) = patch.source_url {
            self.source_url = url;
        }
        if let Some(name) = patch.source_name {
            self.source_name = name;
        }
        if let Some(external_id) = patch.external_id {
            self.external_id = external_id;
        }
    }
}

/// Partial field update merged into a row by `EditorState::update_row`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowPatch {
    pub source_url: Option<String>,
    pub source_name: Option<String>,
    pub external_id: Option<String>,
}

impl RowPatch {
    pub fn source_url(value: impl Into<String>) -> Self {
        Self {
            source_url: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn source_name(value: impl Into<String>) -> Self {
        Self {
            source_name: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn external_id(value: impl Into<String>) -> Self {
        Self {
            external_id: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.source_url.is_none() && self.source_name.is_none() && self.external_id.is_none()
    }
}

/// A field value counts as missing when nothing but whitespace was typed.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
