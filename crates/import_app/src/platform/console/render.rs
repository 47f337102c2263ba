use std::fmt::Write;

use import_core::{EditorViewModel, PendingSource, WizardStep, WizardViewModel};
use import_engine::LabelCatalog;

const STEP_TITLES: [&str; 3] = [
    "dataset.import.Select source",
    "dataset.import.Data process",
    "dataset.import.Upload data",
];

pub fn render(view: &WizardViewModel, labels: &LabelCatalog) -> String {
    let mut out = String::new();
    let step = view.step.index();
    let _ = writeln!(
        out,
        "== {} ({}/{}) ==",
        labels.lookup(STEP_TITLES[step]),
        step + 1,
        STEP_TITLES.len()
    );

    match &view.editor {
        Some(editor) => render_editor(&mut out, editor, labels),
        None => render_sources(&mut out, &view.sources),
    }

    let mut actions = Vec::new();
    if view.step == WizardStep::CollectSources {
        actions.push(format!("[add] {}", labels.lookup("common.Add new")));
    } else {
        actions.push(format!("[back] {}", labels.lookup("common.Last Step")));
    }
    let can_advance = match (&view.editor, view.step) {
        (Some(editor), _) => editor.can_submit,
        (None, step) => step.next().is_some(),
    };
    if can_advance {
        actions.push(format!("[next] {}", labels.lookup("common.Next Step")));
    }
    let _ = writeln!(out, "{}", actions.join("   "));
    out
}

fn render_editor(out: &mut String, editor: &EditorViewModel, labels: &LabelCatalog) {
    let _ = writeln!(
        out,
        "{:>3}  {:<40} {:<16} {}",
        "#",
        labels.lookup("dataset.External url"),
        labels.lookup("dataset.External id"),
        labels.lookup("dataset.filename"),
    );
    for (index, row) in editor.rows.iter().enumerate() {
        let marker = if row.url_required { '*' } else { ' ' };
        let _ = writeln!(
            out,
            "{:>3}{} {:<40} {:<16} {}",
            index + 1,
            marker,
            row.source_url,
            row.external_id,
            row.source_name
        );
        if row.url_missing {
            let _ = writeln!(
                out,
                "      ^ {}: {}",
                labels.lookup("dataset.External url"),
                labels.lookup("common.Required")
            );
        }
    }
}

fn render_sources(out: &mut String, sources: &[PendingSource]) {
    for (index, source) in sources.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}  [{}] {} <{}> ({:?})",
            index + 1,
            source.icon,
            source.source_name,
            source.source_url,
            source.create_status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use import_core::{update, Msg, WizardState};

    #[test]
    fn editor_marks_required_rows_and_errors() {
        let (state, _) = update(WizardState::new(), Msg::AddRowClicked);
        let (state, _) = update(state, Msg::NextClicked);

        let text = render(&state.view(), &LabelCatalog::default());

        assert!(text.starts_with("== Select source (1/3) =="));
        assert!(text.contains("  1* "));
        assert!(text.contains("  2  "));
        assert_eq!(text.matches("External URL: Required").count(), 1);
        assert!(text.contains("[next] Next step"));
    }

    #[test]
    fn empty_editor_hides_next() {
        let (state, _) = update(WizardState::new(), Msg::RemoveRowClicked { index: 0 });
        let text = render(&state.view(), &LabelCatalog::default());

        assert!(text.contains("[add] Add new"));
        assert!(!text.contains("[next]"));
    }
}
