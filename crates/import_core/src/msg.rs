#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User typed into the URL field of a row.
    UrlEdited { index: usize, value: String },
    /// User typed into the name field of a row.
    NameEdited { index: usize, value: String },
    /// User typed into the external id field of a row.
    ExternalIdEdited { index: usize, value: String },
    /// The URL field of a row lost focus.
    UrlBlurred { index: usize },
    /// User clicked "Add new".
    AddRowClicked,
    /// User clicked the delete icon of a row.
    RemoveRowClicked { index: usize },
    /// User clicked "Next Step" on the row editor.
    NextClicked,
    /// Records built from an accepted submission, ready to publish.
    SourcesCommitted {
        revision: u64,
        sources: Vec<crate::PendingSource>,
    },
    /// An external step asked the host to advance.
    StepForward,
    /// User navigated back one step.
    StepBack,
}
