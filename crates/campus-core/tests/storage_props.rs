// Rust guideline compliant 2026-02-06

//! Property-based tests for the JSONL storage module.

use campus_core::{GradeRecord, Record, Store};
use proptest::prelude::*;
use std::collections::HashSet;
use tempfile::TempDir;

/// Generates grade records with unique storage keys.
fn arb_grades() -> impl Strategy<Value = Vec<GradeRecord>> {
    prop::collection::vec(
        (
            "[A-Z0-9]{12}",
            "[A-Za-z]{1,12}",
            0u8..=100,
        ),
        0..32,
    )
    .prop_map(|entries| {
        let mut seen = HashSet::new();
        entries
            .into_iter()
            .filter_map(|(student_id, subject, marks)| {
                let record = GradeRecord {
                    student_id,
                    subject,
                    marks,
                };
                seen.insert(record.key()).then_some(record)
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// `save_all` then `load_all` preserves every record in order.
    #[test]
    fn prop_save_all_round_trip(records in arb_grades()) {
        let temp = TempDir::new().expect("temp dir");
        let store: Store<GradeRecord> =
            Store::new(temp.path().join("grades.jsonl")).expect("create store");

        store.save_all(&records).expect("save");
        let loaded = store.load_all().expect("load");
        prop_assert_eq!(loaded, records);
    }

    /// Deleting each record in turn leaves exactly the others.
    #[test]
    fn prop_delete_removes_exactly_one(records in arb_grades()) {
        prop_assume!(!records.is_empty());

        let temp = TempDir::new().expect("temp dir");
        let store: Store<GradeRecord> =
            Store::new(temp.path().join("grades.jsonl")).expect("create store");
        store.save_all(&records).expect("save");

        let victim = records[0].key();
        store.delete(&victim).expect("delete first record");

        let loaded = store.load_all().expect("load");
        prop_assert_eq!(loaded.len(), records.len() - 1);
        prop_assert!(loaded.iter().all(|record| record.key() != victim));
    }
}
