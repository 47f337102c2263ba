use std::sync::atomic::{AtomicU64, Ordering};

use import_core::{
    build_pending_sources, CreateStatus, DraftRow, IconResolver, IdGenerator, PendingSource, RowId,
};
use pretty_assertions::assert_eq;

#[derive(Default)]
struct SequentialIds(AtomicU64);

impl IdGenerator for SequentialIds {
    fn generate(&self) -> String {
        format!("id-{}", self.0.fetch_add(1, Ordering::Relaxed) + 1)
    }
}

/// Echoes the URL back so the test can see which URL each icon came from.
struct EchoIcon;

impl IconResolver for EchoIcon {
    fn resolve(&self, source_url: &str) -> String {
        format!("icon:{source_url}")
    }
}

fn draft(id: u64, url: &str, name: &str, external_id: &str) -> DraftRow {
    DraftRow {
        id: RowId(id),
        source_url: url.to_string(),
        source_name: name.to_string(),
        external_id: external_id.to_string(),
    }
}

#[test]
fn blank_rows_are_dropped_and_order_is_kept() {
    let rows = vec![
        draft(1, "https://a.com/f1", "", ""),
        draft(2, "", "", ""),
        draft(3, "https://a.com/f2", "n2", "x2"),
    ];

    let sources = build_pending_sources(&rows, &SequentialIds::default(), &EchoIcon);

    assert_eq!(
        sources,
        vec![
            PendingSource {
                id: "id-1".to_string(),
                create_status: CreateStatus::Waiting,
                source_name: "https://a.com/f1".to_string(),
                icon: "icon:https://a.com/f1".to_string(),
                external_id: String::new(),
                source_url: "https://a.com/f1".to_string(),
            },
            PendingSource {
                id: "id-2".to_string(),
                create_status: CreateStatus::Waiting,
                source_name: "n2".to_string(),
                icon: "icon:https://a.com/f2".to_string(),
                external_id: "x2".to_string(),
                source_url: "https://a.com/f2".to_string(),
            },
        ]
    );
}

#[test]
fn whitespace_only_url_counts_as_blank() {
    let rows = vec![draft(1, "   ", "name", "")];
    let sources = build_pending_sources(&rows, &SequentialIds::default(), &EchoIcon);
    assert!(sources.is_empty());
}

#[test]
fn empty_input_builds_nothing() {
    let sources = build_pending_sources(&[], &SequentialIds::default(), &EchoIcon);
    assert!(sources.is_empty());
}

#[test]
fn every_record_gets_its_own_id() {
    let rows: Vec<_> = (1..=5)
        .map(|n| draft(n, &format!("https://a.com/{n}.pdf"), "", ""))
        .collect();
    let sources = build_pending_sources(&rows, &SequentialIds::default(), &EchoIcon);

    let mut ids: Vec<_> = sources.iter().map(|source| source.id.clone()).collect();
    ids.dedup();
    assert_eq!(ids.len(), 5);
}

#[test]
fn records_serialize_with_camel_case_fields() {
    let rows = vec![draft(1, "https://a.com/f.pdf", "f.pdf", "e1")];
    let sources = build_pending_sources(&rows, &SequentialIds::default(), &EchoIcon);
    let json = serde_json::to_value(&sources[0]).unwrap();

    assert_eq!(json["createStatus"], "waiting");
    assert_eq!(json["sourceName"], "f.pdf");
    assert_eq!(json["externalId"], "e1");
    assert_eq!(json["sourceUrl"], "https://a.com/f.pdf");
}
