use crate::{DraftRow, WizardStep};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Build records for these rows and answer with `Msg::SourcesCommitted`,
    /// passing `revision` back unchanged.
    CommitSources { revision: u64, rows: Vec<DraftRow> },
    /// The host switched to another step.
    StepChanged { step: WizardStep },
}
