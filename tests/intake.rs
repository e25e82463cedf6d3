use std::path::Path;

use lungai_predict::error::ClientError;
use lungai_predict::intake::biomarker::{BiomarkerDraft, BiomarkerField};
use lungai_predict::intake::upload::{UploadSlot, accepted_mime};

#[test]
fn set_field_parses_and_clears() {
    let mut draft = BiomarkerDraft::new();
    draft.set_field("lKynurenine", "2.5").unwrap();
    assert_eq!(draft.l_kynurenine, Some(2.5));
    draft.set_field("lKynurenine", "  ").unwrap();
    assert_eq!(draft.l_kynurenine, None);
}

#[test]
fn set_field_rejects_unknown_and_text() {
    let mut draft = BiomarkerDraft::new();
    assert!(matches!(
        draft.set_field("glucose", "1").unwrap_err(),
        ClientError::Validation(_)
    ));
    assert!(draft.set_field("taurine", "abc").is_err());
    assert!(draft.set_field("taurine", "NaN").is_err());
    assert_eq!(draft.taurine, None);
}

#[test]
fn draft_json_uses_wire_names() {
    let draft: BiomarkerDraft =
        serde_json::from_str(r#"{"palmitoylLCarnitine": 0.3, "oTyr": null}"#).unwrap();
    assert_eq!(draft.palmitoyl_l_carnitine, Some(0.3));
    assert_eq!(draft.o_tyr, None);
    assert_eq!(draft.missing().len(), 9);
}

#[test]
fn merge_overlays_only_present_values() {
    let mut base = BiomarkerDraft::new();
    base.set(BiomarkerField::Proline, Some(1.0));
    base.set(BiomarkerField::Taurine, Some(2.0));
    let mut overrides = BiomarkerDraft::new();
    overrides.set(BiomarkerField::Taurine, Some(9.5));
    overrides.set(BiomarkerField::Carnitine, Some(0.1));

    base.merge(&overrides);
    assert_eq!(base.get(BiomarkerField::Proline), Some(1.0));
    assert_eq!(base.get(BiomarkerField::Taurine), Some(9.5));
    assert_eq!(base.get(BiomarkerField::Carnitine), Some(0.1));
    assert_eq!(base.missing().len(), 7);
}

#[test]
fn incomplete_draft_lists_missing_fields() {
    let mut draft = BiomarkerDraft::new();
    for field in BiomarkerField::ALL {
        draft.set(field, Some(1.0));
    }
    draft.set(BiomarkerField::OTyr, None);
    match draft.to_sample().unwrap_err() {
        ClientError::Validation(msg) => assert!(msg.contains("oTyr")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn extension_filter_is_case_insensitive() {
    assert_eq!(accepted_mime(Path::new("scan.JPG")).unwrap(), "image/jpeg");
    assert_eq!(accepted_mime(Path::new("scan.jpeg")).unwrap(), "image/jpeg");
    assert_eq!(accepted_mime(Path::new("scan.png")).unwrap(), "image/png");
    assert!(accepted_mime(Path::new("scan.gif")).is_err());
    assert!(accepted_mime(Path::new("scan")).is_err());
}

#[test]
fn slot_releases_on_drop() {
    let slot = UploadSlot::new();
    let guard = slot.try_begin();
    assert!(guard.is_some());
    assert!(slot.is_busy());
    assert!(slot.try_begin().is_none());
    drop(guard);
    assert!(!slot.is_busy());
    assert!(slot.try_begin().is_some());
}
