use serde_json::json;
use tempfile::TempDir;
use ticket_model::{EntityClass, TicketRecord};
use ticket_normalize::{NormalizerConfig, NormalizerSet};

fn config_in(dir: &TempDir) -> NormalizerConfig {
    NormalizerConfig {
        mappings_dir: dir.path().to_path_buf(),
        ..NormalizerConfig::default()
    }
}

#[test]
fn normalizes_a_record_and_keeps_other_fields() {
    let dir = TempDir::new().unwrap();
    let mut set = NormalizerSet::open(&config_in(&dir)).unwrap();

    let record: TicketRecord = serde_json::from_value(json!({
        "company_name": "Taft Electric",
        "support_category": "n/a",
        "subject_template": "Weekly catch-up",
        "subject": "Re: status"
    }))
    .unwrap();
    let normalized = set.normalize_record(&record);

    assert_eq!(normalized.company_name.as_deref(), Some("TaftElectric"));
    assert_eq!(normalized.support_category.as_deref(), Some("Other"));
    assert_eq!(normalized.subject_template.as_deref(), Some("Other"));
    assert_eq!(normalized.extra["subject"], "Re: status");
}

#[test]
fn absent_and_empty_fields_are_left_alone() {
    let dir = TempDir::new().unwrap();
    let mut set = NormalizerSet::open(&config_in(&dir)).unwrap();

    let record = TicketRecord {
        company_name: Some(String::new()),
        ..TicketRecord::default()
    };
    assert_eq!(set.normalize_record(&record), record);
}

#[test]
fn normalizes_arrays_single_objects_and_nested_arrays() {
    let dir = TempDir::new().unwrap();
    let mut set = NormalizerSet::open(&config_in(&dir)).unwrap();

    let mut array = json!([
        {"company_name": "GBI", "support_category": "Other", "subject_template": "Unexpected Error", "id": 1},
        {"company_name": "SQL error occurred", "support_category": "unknown", "subject_template": null},
        {"id": 3}
    ]);
    assert_eq!(set.normalize_document(&mut array), 2);
    assert_eq!(array[1]["company_name"], "Unknown Company");
    assert_eq!(array[1]["support_category"], "Other");
    assert!(array[1]["subject_template"].is_null());
    assert_eq!(array[0]["id"], 1);

    let mut single = json!({"company_name": "Great Basin Industrial Inc."});
    assert_eq!(set.normalize_document(&mut single), 1);
    assert_eq!(single["company_name"], "Great Basin Industrial");

    let mut nested = json!({"emails": [{"subject_template": "Unexpected Errors"}], "source": "inbox"});
    assert_eq!(set.normalize_document(&mut nested), 1);
    assert_eq!(nested["emails"][0]["subject_template"], "Unexpected Error");

    let mut scalar = json!("GBI");
    assert_eq!(set.normalize_document(&mut scalar), 0);
}

#[test]
fn saved_tables_reload_without_seeding() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    let mut set = NormalizerSet::open(&config).unwrap();
    set.company.normalize_checked("Cobalt Roofing");
    assert!(set.save_all());
    assert_eq!(config.layout().existing(), EntityClass::ALL.to_vec());

    let reopened = NormalizerSet::open(&NormalizerConfig {
        seed_vocabulary: false,
        ..config
    })
    .unwrap();
    let company = reopened.get(EntityClass::Company);
    assert!(company.standardized().contains("Cobalt Roofing"));
    assert!(company.standardized().contains("GBI"));
    assert_eq!(reopened.get(EntityClass::Template).standardized().len(), 7);
}

#[test]
fn pending_count_spans_classes() {
    let dir = TempDir::new().unwrap();
    let mut set = NormalizerSet::open(&config_in(&dir)).unwrap();
    set.category.normalize("Document Processing Error");
    assert_eq!(set.pending_count(), 1);
}

#[test]
fn invalid_thresholds_fail_to_open() {
    let config = NormalizerConfig {
        auto_threshold: 1.5,
        ..NormalizerConfig::default()
    };
    assert!(NormalizerSet::open(&config).is_err());
}
