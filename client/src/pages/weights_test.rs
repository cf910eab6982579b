use super::*;

fn rows(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs.iter().map(|(d, w)| ((*d).to_owned(), (*w).to_owned())).collect()
}

fn template() -> WeightTemplate {
    WeightTemplate {
        id: "tpl-1".to_owned(),
        name: "Backend".to_owned(),
        description: None,
        items: vec![WeightItem { dimension: "skills".to_owned(), weight: 0.7 }],
        is_default: true,
        created_at: None,
        updated_at: None,
    }
}

// =============================================================================
// WeightDraft
// =============================================================================

#[test]
fn default_draft_is_new_with_standard_dimensions() {
    let draft = WeightDraft::default();
    assert_eq!(draft.editing, None);
    let dims: Vec<&str> = draft.rows.iter().map(|(d, _)| d.as_str()).collect();
    assert_eq!(dims, ["skills", "experience", "education"]);
}

#[test]
fn from_template_marks_draft_as_editing() {
    let draft = WeightDraft::from_template(&template());
    assert_eq!(draft.editing.as_deref(), Some("tpl-1"));
    assert_eq!(draft.rows, rows(&[("skills", "0.7")]));
    assert!(draft.is_default);
}

#[test]
fn to_input_parses_and_trims() {
    let draft = WeightDraft {
        editing: None,
        name: " Backend ".to_owned(),
        description: "  ".to_owned(),
        rows: rows(&[(" skills ", " 0.5 "), ("experience", "0.5")]),
        is_default: false,
    };
    let input = draft.to_input().unwrap();
    assert_eq!(input.name, "Backend");
    assert_eq!(input.description, None);
    assert_eq!(input.items[0], WeightItem { dimension: "skills".to_owned(), weight: 0.5 });
}

#[test]
fn to_input_rejects_unparseable_weight() {
    let draft = WeightDraft { name: "Backend".to_owned(), rows: rows(&[("skills", "lots")]), ..Default::default() };
    assert_eq!(draft.to_input(), Err("Weights must be non-negative numbers."));
}

#[test]
fn to_input_runs_payload_validation() {
    let blank_name = WeightDraft::default();
    assert_eq!(blank_name.to_input(), Err("Template name is required."));

    let negative = WeightDraft { name: "Backend".to_owned(), rows: rows(&[("skills", "-1")]), ..Default::default() };
    assert_eq!(negative.to_input(), Err("Weights must be non-negative numbers."));
}

// =============================================================================
// weight_total
// =============================================================================

#[test]
fn weight_total_skips_unparseable_rows() {
    let total = weight_total(&rows(&[("a", "0.25"), ("b", ""), ("c", "0.5"), ("d", "x")]));
    assert!((total - 0.75).abs() < f64::EPSILON);
}
