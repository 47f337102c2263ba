//! Import core: pure state machine for the external-file import wizard.
mod effect;
mod msg;
mod name;
mod row;
mod source;
mod state;
mod update;
mod validation;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use name::derive_source_name;
pub use row::{is_blank, DraftRow, RowId, RowPatch};
pub use source::{build_pending_sources, CreateStatus, IconResolver, IdGenerator, PendingSource};
pub use state::{EditorState, MountedStep, SubmitOutcome, WizardHost, WizardState, WizardStep};
pub use update::update;
pub use validation::{validate_rows, RowField, ValidationError, ValidationErrors};
pub use view_model::{EditorViewModel, RowView, WizardViewModel};
