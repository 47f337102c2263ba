use std::fmt;

use crate::row::{is_blank, DraftRow, RowId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowField {
    SourceUrl,
}

impl fmt::Display for RowField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowField::SourceUrl => write!(f, "source url"),
        }
    }
}

/// A required field left blank on a row that is not the open (last) row.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("row {index} ({row_id}): {field} is required")]
pub struct ValidationError {
    pub index: usize,
    pub row_id: RowId,
    pub field: RowField,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{} required field(s) missing", .0.len())]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<ValidationError> {
        self.0
    }
}

/// Checks the URL of every row except the last one.
///
/// The exemption is evaluated against the list as it is now, so it moves
/// whenever rows are appended or removed.
pub fn validate_rows(rows: &[DraftRow]) -> Result<(), ValidationErrors> {
    let last = rows.len().saturating_sub(1);
    let errors: Vec<_> = rows
        .iter()
        .enumerate()
        .filter(|(index, row)| *index != last && is_blank(&row.source_url))
        .map(|(index, row)| ValidationError {
            index,
            row_id: row.id,
            field: RowField::SourceUrl,
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}
