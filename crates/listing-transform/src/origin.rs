//! Country-of-origin block synthesis.
//!
//! Code resolution is tiered and the order is fixed:
//!
//! 1. exact (case-insensitive) match in the origin table
//! 2. partial match against the table, either direction, table order
//! 3. keyword heuristic: domestic markers give `00`, anything else `02`
//!
//! Table hits always beat the heuristic, even when they contradict it.

use tracing::debug;

use listing_model::{
    ConversionOptions, DOMESTIC_ORIGIN_CODE, IMPORT_ORIGIN_CODE, OriginInfo, OriginTable,
    is_import_code,
};

use crate::category::CategoryClassifier;

/// Substrings marking domestic (Korean-made) goods.
const DOMESTIC_MARKERS: &[&str] = &["국내", "한국", "국산", "domestic", "korea"];

/// Builds [`OriginInfo`] blocks.
pub struct OriginSynthesizer<'a, C: ?Sized> {
    options: &'a ConversionOptions,
    classifier: &'a C,
}

impl<'a, C: CategoryClassifier + ?Sized> OriginSynthesizer<'a, C> {
    pub fn new(options: &'a ConversionOptions, classifier: &'a C) -> Self {
        Self {
            options,
            classifier,
        }
    }

    pub fn synthesize(
        &self,
        origin_text: Option<&str>,
        category_path: Option<&str>,
        table: &OriginTable,
    ) -> OriginInfo {
        self.check_marine(category_path);

        let Some(text) = origin_text.map(str::trim).filter(|text| !text.is_empty()) else {
            debug!("no origin given; using domestic default");
            return OriginInfo {
                code: DOMESTIC_ORIGIN_CODE.to_string(),
                content: self.options.domestic_origin_label.clone(),
                importer: None,
            };
        };

        let mut code = resolve_origin_code(text, table);
        if code.is_empty() {
            debug!(origin = text, "origin resolved to empty code; using domestic code");
            code = DOMESTIC_ORIGIN_CODE.to_string();
        }

        let importer = is_import_code(&code).then(|| self.options.importer_placeholder.clone());
        debug!(origin = text, code = %code, imported = importer.is_some(), "origin resolved");

        OriginInfo {
            code,
            content: text.to_string(),
            importer,
        }
    }

    /// Marine categories would need ocean-area fields, which have no source
    /// yet; they are omitted for every category.
    fn check_marine(&self, category_path: Option<&str>) {
        if self.classifier.is_marine_category(category_path) {
            debug!(
                category = category_path.unwrap_or_default(),
                "marine category; ocean area fields omitted"
            );
        }
    }
}

/// Resolve an origin code for non-blank text.
pub fn resolve_origin_code(text: &str, table: &OriginTable) -> String {
    table
        .exact(text)
        .or_else(|| table.partial(text))
        .unwrap_or_else(|| heuristic_origin_code(text))
        .to_string()
}

/// Keyword fallback used when the table has no entry.
pub fn heuristic_origin_code(text: &str) -> &'static str {
    let lowered = text.to_lowercase();
    if DOMESTIC_MARKERS
        .iter()
        .any(|marker| lowered.contains(marker))
    {
        DOMESTIC_ORIGIN_CODE
    } else {
        IMPORT_ORIGIN_CODE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::RuleClassifier;

    #[test]
    fn heuristic_codes() {
        assert_eq!(heuristic_origin_code("국내산"), "00");
        assert_eq!(heuristic_origin_code("Made in KOREA"), "00");
        assert_eq!(heuristic_origin_code("Domestic"), "00");
        assert_eq!(heuristic_origin_code("중국"), "02");
        assert_eq!(heuristic_origin_code("Vietnam"), "02");
    }

    #[test]
    fn empty_table_code_falls_back_to_domestic() {
        let options = ConversionOptions::default();
        let classifier = RuleClassifier::default();
        let synthesizer = OriginSynthesizer::new(&options, &classifier);
        let table = OriginTable::from_pairs([("미상", "")]);
        let info = synthesizer.synthesize(Some("미상"), None, &table);
        assert_eq!(info.code, "00");
        assert_eq!(info.content, "미상");
        assert_eq!(info.importer, None);
    }
}
