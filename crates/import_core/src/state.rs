use import_logging::import_debug;

use crate::name::derive_source_name;
use crate::row::{is_blank, DraftRow, RowId, RowPatch};
use crate::source::PendingSource;
use crate::validation::{validate_rows, ValidationError, ValidationErrors};
use crate::view_model::{EditorViewModel, RowView, WizardViewModel};

/// The three wizard stages, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    #[default]
    CollectSources,
    ConfigureProcessing,
    Upload,
}

impl WizardStep {
    pub fn index(self) -> usize {
        match self {
            WizardStep::CollectSources => 0,
            WizardStep::ConfigureProcessing => 1,
            WizardStep::Upload => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(WizardStep::CollectSources),
            1 => Some(WizardStep::ConfigureProcessing),
            2 => Some(WizardStep::Upload),
            _ => None,
        }
    }

    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    pub fn previous(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }
}

/// Shared wizard state: which step is active and the committed sources.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WizardHost {
    active_step: WizardStep,
    sources: Vec<PendingSource>,
}

impl WizardHost {
    pub fn new(active_step: WizardStep, sources: Vec<PendingSource>) -> Self {
        Self {
            active_step,
            sources,
        }
    }

    pub fn active_step(&self) -> WizardStep {
        self.active_step
    }

    pub fn sources(&self) -> &[PendingSource] {
        &self.sources
    }

    /// Replaces the committed list wholesale.
    pub fn set_sources(&mut self, sources: Vec<PendingSource>) {
        self.sources = sources;
    }

    /// Advances one step. Returns false when already on the last step.
    pub fn go_to_next(&mut self) -> bool {
        match self.active_step.next() {
            Some(step) => {
                self.active_step = step;
                true
            }
            None => false,
        }
    }

    /// Moves back one step. Returns false when already on the first step.
    pub fn go_to_previous(&mut self) -> bool {
        match self.active_step.previous() {
            Some(step) => {
                self.active_step = step;
                true
            }
            None => false,
        }
    }
}

/// Result of pressing "next" in the row editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The list is empty; submission is disabled.
    Disabled,
    /// At least one required URL is blank. Errors are now shown on the rows.
    Rejected(ValidationErrors),
    /// Rows with a non-blank URL, in list order.
    Accepted(Vec<DraftRow>),
}

/// Draft rows of step 0 plus the field errors from the last submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorState {
    rows: Vec<DraftRow>,
    next_row_id: u64,
    errors: Vec<ValidationError>,
    revalidate: bool,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::mount(&[])
    }
}

impl EditorState {
    /// Seeds the editor from previously committed sources, or with a single
    /// blank row when there are none.
    pub fn mount(sources: &[PendingSource]) -> Self {
        let mut editor = Self {
            rows: Vec::with_capacity(sources.len().max(1)),
            next_row_id: 1,
            errors: Vec::new(),
            revalidate: false,
        };
        if sources.is_empty() {
            editor.insert_row();
        } else {
            for source in sources {
                let id = editor.allocate_id();
                editor.rows.push(DraftRow {
                    id,
                    source_url: source.source_url.clone(),
                    source_name: source.source_name.clone(),
                    external_id: source.external_id.clone(),
                });
            }
        }
        editor
    }

    pub fn rows(&self) -> &[DraftRow] {
        &self.rows
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn is_last(&self, index: usize) -> bool {
        index + 1 == self.rows.len()
    }

    /// Appends a blank row at the end of the list.
    pub fn insert_row(&mut self) -> RowId {
        let id = self.allocate_id();
        self.rows.push(DraftRow::blank(id));
        self.refresh_errors();
        id
    }

    /// Removes the row at `index`, whatever it holds. An emptied list stays empty.
    pub fn remove_row(&mut self, index: usize) -> Option<DraftRow> {
        if index >= self.rows.len() {
            return None;
        }
        let removed = self.rows.remove(index);
        self.refresh_errors();
        Some(removed)
    }

    /// Merges the supplied fields into the row at `index`.
    pub fn update_row(&mut self, index: usize, patch: RowPatch) -> bool {
        let Some(row) = self.rows.get_mut(index) else {
            return false;
        };
        row.apply(patch);
        self.refresh_errors();
        true
    }

    /// Side effects of the URL field losing focus, in order: derive the name,
    /// then keep an open row at the end. Returns whether anything changed.
    pub fn blur_url(&mut self, index: usize) -> bool {
        let Some(row) = self.rows.get(index) else {
            return false;
        };
        let url = row.source_url.clone();
        let mut changed = false;

        if is_blank(&row.source_name) {
            if let Some(name) = derive_source_name(&url) {
                import_debug!("derived name {:?} for {}", name, row.id);
                changed |= name != row.source_name;
                self.update_row(index, RowPatch::source_name(name));
            }
        }

        if !is_blank(&url) && self.is_last(index) {
            let id = self.insert_row();
            import_debug!("appended open row {}", id);
            changed = true;
        }

        changed
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if self.rows.is_empty() {
            return SubmitOutcome::Disabled;
        }
        match validate_rows(&self.rows) {
            Ok(()) => {
                self.errors.clear();
                self.revalidate = false;
                let rows = self
                    .rows
                    .iter()
                    .filter(|row| !is_blank(&row.source_url))
                    .cloned()
                    .collect();
                SubmitOutcome::Accepted(rows)
            }
            Err(errors) => {
                import_debug!("submission blocked: {}", errors);
                self.errors = errors.errors().to_vec();
                self.revalidate = true;
                SubmitOutcome::Rejected(errors)
            }
        }
    }

    pub fn view(&self) -> EditorViewModel {
        let rows = self
            .rows
            .iter()
            .enumerate()
            .map(|(index, row)| RowView {
                id: row.id,
                source_url: row.source_url.clone(),
                source_name: row.source_name.clone(),
                external_id: row.external_id.clone(),
                url_required: !self.is_last(index),
                url_missing: self.errors.iter().any(|error| error.row_id == row.id),
            })
            .collect();
        EditorViewModel {
            rows,
            can_submit: !self.rows.is_empty(),
        }
    }

    fn allocate_id(&mut self) -> RowId {
        let id = RowId(self.next_row_id);
        self.next_row_id += 1;
        id
    }

    fn refresh_errors(&mut self) {
        if self.revalidate {
            self.errors = match validate_rows(&self.rows) {
                Ok(()) => Vec::new(),
                Err(errors) => errors.into_vec(),
            };
        }
    }
}

/// The component mounted for the active step. Exactly one exists at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MountedStep {
    CollectSources(EditorState),
    ConfigureProcessing,
    Upload,
}

impl MountedStep {
    /// Mounts the component for `step`. The row editor is seeded from the
    /// committed sources each time it is mounted.
    pub fn dispatch(step: WizardStep, sources: &[PendingSource]) -> Self {
        match step {
            WizardStep::CollectSources => MountedStep::CollectSources(EditorState::mount(sources)),
            WizardStep::ConfigureProcessing => MountedStep::ConfigureProcessing,
            WizardStep::Upload => MountedStep::Upload,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState {
    host: WizardHost,
    mounted: MountedStep,
    /// Bumped on every row mutation and every remount. A commit built from
    /// an older revision is stale.
    revision: u64,
    dirty: bool,
}

impl Default for WizardState {
    fn default() -> Self {
        Self::resume(WizardHost::default())
    }
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mounts whatever step the host currently points at.
    pub fn resume(host: WizardHost) -> Self {
        let mounted = MountedStep::dispatch(host.active_step(), host.sources());
        Self {
            host,
            mounted,
            revision: 0,
            dirty: false,
        }
    }

    pub fn host(&self) -> &WizardHost {
        &self.host
    }

    pub fn mounted(&self) -> &MountedStep {
        &self.mounted
    }

    pub fn editor(&self) -> Option<&EditorState> {
        match &self.mounted {
            MountedStep::CollectSources(editor) => Some(editor),
            _ => None,
        }
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn view(&self) -> WizardViewModel {
        WizardViewModel {
            step: self.host.active_step(),
            editor: self.editor().map(EditorState::view),
            sources: self.host.sources().to_vec(),
            dirty: self.dirty,
        }
    }

    /// Returns and clears the flag set by any visible change.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Records that the draft rows changed.
    pub(crate) fn touch_rows(&mut self) {
        self.revision += 1;
        self.dirty = true;
    }

    pub(crate) fn editor_mut(&mut self) -> Option<&mut EditorState> {
        match &mut self.mounted {
            MountedStep::CollectSources(editor) => Some(editor),
            _ => None,
        }
    }

    pub(crate) fn host_mut(&mut self) -> &mut WizardHost {
        &mut self.host
    }

    /// Unmounts the current component and mounts the one for the host's
    /// active step.
    pub(crate) fn remount(&mut self) {
        self.mounted = MountedStep::dispatch(self.host.active_step(), self.host.sources());
        import_debug!("mounted step {}", self.host.active_step().index());
        self.revision += 1;
        self.dirty = true;
    }
}
