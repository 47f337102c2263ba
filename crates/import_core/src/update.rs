use import_logging::{import_debug, import_info};

use crate::{Effect, Msg, RowPatch, SubmitOutcome, WizardState, WizardStep};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: WizardState, msg: Msg) -> (WizardState, Vec<Effect>) {
    let effects = match msg {
        Msg::UrlEdited { index, value } => {
            edit_row(&mut state, index, RowPatch::source_url(value));
            Vec::new()
        }
        Msg::NameEdited { index, value } => {
            edit_row(&mut state, index, RowPatch::source_name(value));
            Vec::new()
        }
        Msg::ExternalIdEdited { index, value } => {
            edit_row(&mut state, index, RowPatch::external_id(value));
            Vec::new()
        }
        Msg::UrlBlurred { index } => {
            let changed = state
                .editor_mut()
                .is_some_and(|editor| editor.blur_url(index));
            if changed {
                state.touch_rows();
            }
            Vec::new()
        }
        Msg::AddRowClicked => {
            if let Some(editor) = state.editor_mut() {
                editor.insert_row();
                state.touch_rows();
            }
            Vec::new()
        }
        Msg::RemoveRowClicked { index } => {
            let removed = state
                .editor_mut()
                .and_then(|editor| editor.remove_row(index));
            if let Some(row) = removed {
                import_debug!("removed {} at index {}", row.id, index);
                state.touch_rows();
            }
            Vec::new()
        }
        Msg::NextClicked => {
            let Some(editor) = state.editor_mut() else {
                return (state, Vec::new());
            };
            match editor.submit() {
                SubmitOutcome::Disabled => Vec::new(),
                SubmitOutcome::Rejected(_) => {
                    state.mark_dirty();
                    Vec::new()
                }
                SubmitOutcome::Accepted(rows) => {
                    import_debug!("submission accepted with {} row(s)", rows.len());
                    vec![Effect::CommitSources {
                        revision: state.revision(),
                        rows,
                    }]
                }
            }
        }
        Msg::SourcesCommitted { revision, sources } => {
            // Only the editor that submitted, with its rows as submitted, may publish.
            if state.host().active_step() != WizardStep::CollectSources
                || revision != state.revision()
            {
                import_debug!(
                    "dropping stale commit (revision {} != {})",
                    revision,
                    state.revision()
                );
                return (state, Vec::new());
            }
            import_info!("publishing {} source(s)", sources.len());
            state.host_mut().set_sources(sources);
            advance(&mut state)
        }
        Msg::StepForward => match state.host().active_step() {
            WizardStep::CollectSources => Vec::new(),
            _ => advance(&mut state),
        },
        Msg::StepBack => {
            if state.host_mut().go_to_previous() {
                state.remount();
                vec![Effect::StepChanged {
                    step: state.host().active_step(),
                }]
            } else {
                Vec::new()
            }
        }
    };

    (state, effects)
}

fn edit_row(state: &mut WizardState, index: usize, patch: RowPatch) {
    let updated = state
        .editor_mut()
        .is_some_and(|editor| editor.update_row(index, patch));
    if updated {
        state.touch_rows();
    }
}

fn advance(state: &mut WizardState) -> Vec<Effect> {
    if state.host_mut().go_to_next() {
        state.remount();
        vec![Effect::StepChanged {
            step: state.host().active_step(),
        }]
    } else {
        Vec::new()
    }
}
