use ticket_cli::summary::{pending_table, resolution_table, view_table};
use ticket_cli::types::{PendingRow, ValueResolution};
use ticket_model::{EntityClass, MappingTable};
use ticket_normalize::{ClassView, Resolution, ResolutionKind};

fn values() -> Vec<ValueResolution> {
    vec![
        ValueResolution {
            raw: "n/a".to_string(),
            resolution: Resolution {
                canonical: "Unknown Company".to_string(),
                kind: ResolutionKind::Default,
            },
        },
        ValueResolution {
            raw: "Acme".to_string(),
            resolution: Resolution {
                canonical: "Acme Co".to_string(),
                kind: ResolutionKind::Suggested { score: 0.75 },
            },
        },
    ]
}

#[test]
fn resolutions_serialize_flat() {
    insta::assert_json_snapshot!(values(), @r#"
    [
      {
        "raw": "n/a",
        "canonical": "Unknown Company",
        "kind": "default"
      },
      {
        "raw": "Acme",
        "canonical": "Acme Co",
        "kind": "suggested",
        "score": 0.75
      }
    ]
    "#);
}

#[test]
fn resolution_table_lists_rule_and_score() {
    let rendered = resolution_table(&values()).to_string();
    assert!(rendered.contains("Unknown Company"));
    assert!(rendered.contains("suggested"));
    assert!(rendered.contains("0.75"));
}

#[test]
fn pending_table_names_the_class() {
    let rows = vec![PendingRow {
        class: EntityClass::Category,
        variant: "Document Processing Error".to_string(),
        suggested: "Document Processing Failures".to_string(),
        score: 0.792_452_830_188_679_2,
    }];
    let rendered = pending_table(&rows).to_string();
    assert!(rendered.contains("category"));
    assert!(rendered.contains("0.79"));
}

#[test]
fn view_groups_variants_under_their_canonical() {
    let mut mappings = MappingTable::new();
    mappings.insert("Acme".to_string(), "Acme Co".to_string());
    mappings.insert("ACME Company".to_string(), "Acme Co".to_string());
    let view = ClassView {
        class: EntityClass::Company,
        mappings,
        standardized_entities: vec!["Acme Co".to_string(), "GBI".to_string()],
    };

    insta::assert_json_snapshot!(view, @r#"
    {
      "class": "company",
      "mappings": {
        "ACME Company": "Acme Co",
        "Acme": "Acme Co"
      },
      "standardized_entities": [
        "Acme Co",
        "GBI"
      ]
    }
    "#);

    let rendered = view_table(&view).to_string();
    assert!(rendered.contains("ACME Company"));
    assert!(rendered.contains("GBI"));
}
