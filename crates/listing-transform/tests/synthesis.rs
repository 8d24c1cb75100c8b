//! Tests for origin and certification block synthesis.

use listing_model::{ConversionOptions, OriginTable};
use listing_transform::{
    CategoryClassifier, CertificationSynthesizer, OriginSynthesizer, RuleClassifier,
};

/// Classifier with fixed answers.
struct FixedClassifier {
    required: bool,
}

impl CategoryClassifier for FixedClassifier {
    fn is_safety_cert_required(&self, _path: Option<&str>, _id: &str) -> bool {
        self.required
    }

    fn is_child_cert_required(&self, _path: Option<&str>, _id: &str) -> bool {
        self.required
    }

    fn is_marine_category(&self, _path: Option<&str>) -> bool {
        self.required
    }
}

#[test]
fn blank_origin_uses_domestic_default() {
    let options = ConversionOptions::default().with_domestic_origin_label("국내");
    let classifier = RuleClassifier::default();
    let synthesizer = OriginSynthesizer::new(&options, &classifier);
    for text in [None, Some(""), Some("   ")] {
        let info = synthesizer.synthesize(text, None, &OriginTable::new());
        assert_eq!(info.code, "00");
        assert_eq!(info.content, "국내");
        assert_eq!(info.importer, None);
    }
}

#[test]
fn domestic_keywords_resolve_to_domestic_code() {
    let options = ConversionOptions::default();
    let classifier = RuleClassifier::default();
    let synthesizer = OriginSynthesizer::new(&options, &classifier);
    for text in ["국내산", "domestic", "한국", "국산 콩"] {
        let info = synthesizer.synthesize(Some(text), None, &OriginTable::new());
        assert_eq!(info.code, "00", "{text}");
        assert_eq!(info.content, text);
        assert_eq!(info.importer, None);
    }
}

#[test]
fn unknown_foreign_origin_is_generic_import_with_placeholder() {
    let options = ConversionOptions::default().with_importer_placeholder("ACME Trading");
    let classifier = RuleClassifier::default();
    let synthesizer = OriginSynthesizer::new(&options, &classifier);
    for text in ["중국", "China"] {
        let info = synthesizer.synthesize(Some(text), None, &OriginTable::new());
        assert_eq!(info.code, "02", "{text}");
        assert_eq!(info.importer.as_deref(), Some("ACME Trading"));
        assert!(info.is_imported());
    }
}

#[test]
fn exact_table_entry_is_used() {
    let options = ConversionOptions::default();
    let classifier = RuleClassifier::default();
    let synthesizer = OriginSynthesizer::new(&options, &classifier);
    let table = OriginTable::from_pairs([("베트남", "0200120"), ("China", "0200037")]);
    let info = synthesizer.synthesize(Some(" china "), None, &table);
    assert_eq!(info.code, "0200037");
    assert_eq!(info.content, "china");
    assert!(info.importer.is_some());
}

#[test]
fn table_beats_heuristic() {
    let options = ConversionOptions::default();
    let classifier = RuleClassifier::default();
    let synthesizer = OriginSynthesizer::new(&options, &classifier);
    // contradicts the heuristic in both directions
    let table = OriginTable::from_pairs([("중국", "00"), ("국내 OEM", "0200037")]);

    let info = synthesizer.synthesize(Some("중국"), None, &table);
    assert_eq!(info.code, "00");
    assert_eq!(info.importer, None);

    let info = synthesizer.synthesize(Some("국내 OEM"), None, &table);
    assert_eq!(info.code, "0200037");
    assert!(info.importer.is_some());
}

#[test]
fn partial_table_match_beats_heuristic() {
    let options = ConversionOptions::default();
    let classifier = RuleClassifier::default();
    let synthesizer = OriginSynthesizer::new(&options, &classifier);
    let table = OriginTable::from_pairs([("국내가공", "0200099")]);
    // "국내" would be domestic by keyword, but the table contains it
    let info = synthesizer.synthesize(Some("국내"), None, &table);
    assert_eq!(info.code, "0200099");
}

#[test]
fn marine_category_never_adds_ocean_fields() {
    let options = ConversionOptions::default();
    for classifier in [
        FixedClassifier { required: true },
        FixedClassifier { required: false },
    ] {
        let synthesizer = OriginSynthesizer::new(&options, &classifier);
        let info = synthesizer.synthesize(Some("노르웨이"), Some("seafood/category"), &OriginTable::new());
        let json = serde_json::to_value(&info).unwrap();
        let object = json.as_object().unwrap();
        for key in ["oceanName", "oceanType", "oceanArea"] {
            assert!(!object.contains_key(key), "{key}");
        }
        assert_eq!(object["originAreaCode"], "02");
    }
}

#[test]
fn certification_flags_identical_in_both_branches() {
    let options = ConversionOptions::default();
    let required = FixedClassifier { required: true };
    let not_required = FixedClassifier { required: false };

    let a = CertificationSynthesizer::new(&options, &required).synthesize(Some("완구"), "1");
    let b = CertificationSynthesizer::new(&options, &not_required).synthesize(Some("과자"), "2");

    assert_eq!(a, b);
    assert!(a.certifications.is_empty());
    assert!(a.exclusion.safety);
    assert!(a.exclusion.child);

    let json = serde_json::to_value(&a).unwrap();
    let flags = json["certificationTargetExcludeContent"].as_object().unwrap();
    assert_eq!(flags.len(), 2);
}

#[test]
fn certification_flags_follow_configuration() {
    let options = ConversionOptions::default().with_child_certification_exclusion(false);
    let classifier = FixedClassifier { required: true };
    let info = CertificationSynthesizer::new(&options, &classifier).synthesize(None, "1");
    assert!(info.exclusion.safety);
    assert!(!info.exclusion.child);
}
