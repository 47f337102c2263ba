use std::sync::Once;

use import_core::{update, DraftRow, EditorState, Msg, RowId, RowPatch, WizardState};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(import_logging::initialize_for_tests);
}

fn rows(state: &WizardState) -> Vec<DraftRow> {
    state.editor().expect("editor mounted").rows().to_vec()
}

fn type_url(state: WizardState, index: usize, url: &str) -> WizardState {
    let (state, _) = update(
        state,
        Msg::UrlEdited {
            index,
            value: url.to_string(),
        },
    );
    let (state, _) = update(state, Msg::UrlBlurred { index });
    state
}

#[test]
fn starts_with_one_blank_row() {
    init_logging();
    let state = WizardState::new();
    let rows = rows(&state);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0], DraftRow::blank(rows[0].id));
}

#[test]
fn blur_on_open_row_appends_a_blank_row() {
    init_logging();
    let state = type_url(WizardState::new(), 0, "http://localhost/doc");
    let rows = rows(&state);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].source_url, "http://localhost/doc");
    assert_eq!(rows[0].source_name, "");
    assert_eq!(rows[0].external_id, "");
    assert_eq!(rows[1], DraftRow::blank(rows[1].id));
    assert_ne!(rows[0].id, rows[1].id);
}

#[test]
fn blur_with_file_url_appends_and_names_the_row() {
    init_logging();
    let before = WizardState::new();
    let first_id = rows(&before)[0].id;

    let state = type_url(before, 0, "https://a.com/doc.txt");
    let rows = rows(&state);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].id, first_id);
    assert_eq!(rows[0].source_url, "https://a.com/doc.txt");
    assert_eq!(rows[0].source_name, "doc.txt");
    assert_eq!(rows[1], DraftRow::blank(rows[1].id));
}

#[test]
fn blur_derives_decoded_name_only_when_name_is_blank() {
    init_logging();
    let state = type_url(WizardState::new(), 0, "https://a.com/folder/My%20File.pdf");
    assert_eq!(rows(&state)[0].source_name, "My File.pdf");

    let (state, _) = update(
        WizardState::new(),
        Msg::NameEdited {
            index: 0,
            value: "custom".to_string(),
        },
    );
    let state = type_url(state, 0, "https://a.com/folder/My%20File.pdf");
    assert_eq!(rows(&state)[0].source_name, "custom");
}

#[test]
fn blur_on_middle_row_does_not_append() {
    init_logging();
    let state = type_url(WizardState::new(), 0, "https://a.com/one.pdf");
    let state = type_url(state, 0, "https://a.com/two.pdf");

    assert_eq!(rows(&state).len(), 2);
}

#[test]
fn blur_with_blank_url_does_not_append() {
    init_logging();
    let state = type_url(WizardState::new(), 0, "   ");
    assert_eq!(rows(&state).len(), 1);
}

#[test]
fn blur_out_of_range_is_ignored() {
    init_logging();
    let mut state = WizardState::new();
    assert!(!state.consume_dirty());

    let (mut next, effects) = update(state, Msg::UrlBlurred { index: 7 });
    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
    assert_eq!(rows(&next).len(), 1);
}

#[test]
fn removing_a_row_keeps_other_identities() {
    init_logging();
    let mut state = WizardState::new();
    for (index, url) in ["https://a.com/1.pdf", "https://a.com/2.pdf", "https://a.com/3.pdf"]
        .into_iter()
        .enumerate()
    {
        state = type_url(state, index, url);
    }
    let before = rows(&state);
    assert_eq!(before.len(), 4);

    let (state, _) = update(state, Msg::RemoveRowClicked { index: 1 });
    let after = rows(&state);

    let mut expected = before;
    expected.remove(1);
    assert_eq!(after, expected);
}

#[test]
fn removing_every_row_leaves_an_empty_list_until_add_is_clicked() {
    init_logging();
    let (state, _) = update(WizardState::new(), Msg::RemoveRowClicked { index: 0 });
    assert!(rows(&state).is_empty());
    assert!(!state.view().editor.unwrap().can_submit);

    let (state, _) = update(state, Msg::AddRowClicked);
    assert_eq!(rows(&state).len(), 1);
    assert!(state.view().editor.unwrap().can_submit);
}

#[test]
fn remove_out_of_range_is_ignored() {
    init_logging();
    let state = WizardState::new();
    let (next, _) = update(state.clone(), Msg::RemoveRowClicked { index: 3 });
    assert_eq!(rows(&next), rows(&state));
}

#[test]
fn identities_are_not_reused_after_removal() {
    let mut editor = EditorState::default();
    let first = editor.rows()[0].id;
    editor.remove_row(0);
    let second = editor.insert_row();

    assert_ne!(first, second);
    assert_eq!(second, RowId(2));
}

#[test]
fn update_row_merges_only_supplied_fields() {
    let mut editor = EditorState::default();
    assert!(editor.update_row(0, RowPatch::source_url("https://a.com/x.pdf")));
    assert!(editor.update_row(0, RowPatch::external_id("e1")));

    let row = &editor.rows()[0];
    assert_eq!(row.source_url, "https://a.com/x.pdf");
    assert_eq!(row.external_id, "e1");
    assert_eq!(row.source_name, "");

    assert!(!editor.update_row(5, RowPatch::source_name("ignored")));
}

#[test]
fn add_row_appends_at_the_end() {
    init_logging();
    let state = type_url(WizardState::new(), 0, "https://a.com/1.pdf");
    let (state, _) = update(state, Msg::AddRowClicked);
    let rows = rows(&state);

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].source_url, "https://a.com/1.pdf");
    assert_eq!(rows[2], DraftRow::blank(rows[2].id));
}

#[test]
fn only_the_last_row_is_optional_in_the_view() {
    init_logging();
    let state = type_url(WizardState::new(), 0, "https://a.com/1.pdf");
    let view = state.view().editor.unwrap();

    let required: Vec<_> = view.rows.iter().map(|row| row.url_required).collect();
    assert_eq!(required, vec![true, false]);
}
