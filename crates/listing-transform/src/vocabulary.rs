//! Controlled-vocabulary translation.
//!
//! Status, display and delivery-method labels use exact, case-sensitive
//! lookup tables; a blank label yields the configured default and an
//! unrecognized one is rejected. Carriers are resolved by ordered substring
//! matching against an alias list, because sellers write carrier names in
//! many forms ("CJ대한통운 택배", "hanjin express", ...).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use listing_model::{Carrier, DeliveryMethod, DisplayStatus, SaleStatus};

/// A non-blank label that is not in the vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized {kind} '{label}'")]
pub struct UnknownLabel {
    pub kind: &'static str,
    pub label: String,
}

const SALE_STATUS_LABELS: &[(&str, SaleStatus)] = &[
    ("판매중", SaleStatus::Sale),
    ("판매", SaleStatus::Sale),
    ("SALE", SaleStatus::Sale),
    ("품절", SaleStatus::OutOfStock),
    ("OUTOFSTOCK", SaleStatus::OutOfStock),
    ("판매중지", SaleStatus::Suspension),
    ("SUSPENSION", SaleStatus::Suspension),
    ("판매종료", SaleStatus::Close),
    ("CLOSE", SaleStatus::Close),
    ("판매금지", SaleStatus::Prohibition),
    ("PROHIBITION", SaleStatus::Prohibition),
];

const DISPLAY_STATUS_LABELS: &[(&str, DisplayStatus)] = &[
    ("전시", DisplayStatus::On),
    ("전시중", DisplayStatus::On),
    ("노출", DisplayStatus::On),
    ("ON", DisplayStatus::On),
    ("전시중지", DisplayStatus::Suspension),
    ("미전시", DisplayStatus::Suspension),
    ("SUSPENSION", DisplayStatus::Suspension),
];

const DELIVERY_METHOD_LABELS: &[(&str, DeliveryMethod)] = &[
    ("택배", DeliveryMethod::Courier),
    ("택배, 소포, 등기", DeliveryMethod::Courier),
    ("소포", DeliveryMethod::Courier),
    ("등기", DeliveryMethod::Courier),
    ("DELIVERY", DeliveryMethod::Courier),
    ("직접배송", DeliveryMethod::Direct),
    ("직접배송(화물배달)", DeliveryMethod::Direct),
    ("화물배달", DeliveryMethod::Direct),
    ("DIRECT", DeliveryMethod::Direct),
];

/// Carrier aliases in match order. Longer, more specific names come before
/// the short codes they contain.
const CARRIER_ALIASES: &[(&str, Carrier)] = &[
    ("CJ대한통운", Carrier::CjLogistics),
    ("대한통운", Carrier::CjLogistics),
    ("CJ LOGISTICS", Carrier::CjLogistics),
    ("CJGLS", Carrier::CjLogistics),
    ("CJ", Carrier::CjLogistics),
    ("한진", Carrier::Hanjin),
    ("HANJIN", Carrier::Hanjin),
    ("롯데", Carrier::Lotte),
    ("LOTTE", Carrier::Lotte),
    ("로젠", Carrier::Logen),
    ("LOGEN", Carrier::Logen),
    ("우체국", Carrier::KoreaPost),
    ("KOREA POST", Carrier::KoreaPost),
    ("EPOST", Carrier::KoreaPost),
    ("경동", Carrier::Kyungdong),
    ("KYUNGDONG", Carrier::Kyungdong),
    ("대신", Carrier::Daesin),
    ("DAESIN", Carrier::Daesin),
    ("CU편의점", Carrier::CuPost),
    ("CU POST", Carrier::CuPost),
    ("GS편의점", Carrier::GsPostbox),
    ("GS POSTBOX", Carrier::GsPostbox),
];

/// Exact-match label table for one vocabulary.
#[derive(Debug, Clone)]
pub struct LabelTable<T> {
    kind: &'static str,
    labels: BTreeMap<String, T>,
}

impl<T: Copy> LabelTable<T> {
    fn from_static(kind: &'static str, entries: &[(&str, T)]) -> Self {
        Self {
            kind,
            labels: entries
                .iter()
                .map(|(label, value)| ((*label).to_string(), *value))
                .collect(),
        }
    }

    /// Add a label; built-in labels are never overridden.
    pub fn insert(&mut self, label: &str, value: T) {
        let label = label.trim();
        if label.is_empty() {
            return;
        }
        self.labels.entry(label.to_string()).or_insert(value);
    }

    /// Exact lookup of a trimmed label.
    pub fn get(&self, label: &str) -> Option<T> {
        self.labels.get(label.trim()).copied()
    }

    /// Translate an optional label, falling back to `default` when blank.
    pub fn translate(&self, label: Option<&str>, default: T) -> Result<T, UnknownLabel> {
        let Some(label) = label.map(str::trim).filter(|label| !label.is_empty()) else {
            return Ok(default);
        };
        self.get(label).ok_or_else(|| UnknownLabel {
            kind: self.kind,
            label: label.to_string(),
        })
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, T)> {
        self.labels.iter().map(|(label, value)| (label.as_str(), *value))
    }
}

/// Extra labels supplied by configuration, keyed by label, valued by API code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularyExtensions {
    pub sale_status: BTreeMap<String, SaleStatus>,
    pub display_status: BTreeMap<String, DisplayStatus>,
    pub delivery_method: BTreeMap<String, DeliveryMethod>,
    /// Appended after the built-in carrier aliases.
    pub carriers: Vec<CarrierAlias>,
}

/// One carrier alias from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarrierAlias {
    pub alias: String,
    pub carrier: Carrier,
}

/// All translation tables, built once per batch.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    pub sale_status: LabelTable<SaleStatus>,
    pub display_status: LabelTable<DisplayStatus>,
    pub delivery_method: LabelTable<DeliveryMethod>,
    carriers: Vec<(String, Carrier)>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            sale_status: LabelTable::from_static("sale status", SALE_STATUS_LABELS),
            display_status: LabelTable::from_static("display status", DISPLAY_STATUS_LABELS),
            delivery_method: LabelTable::from_static("delivery method", DELIVERY_METHOD_LABELS),
            carriers: CARRIER_ALIASES
                .iter()
                .map(|(alias, carrier)| (alias.to_uppercase(), *carrier))
                .collect(),
        }
    }
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in tables extended with configured labels.
    pub fn with_extensions(extensions: &VocabularyExtensions) -> Self {
        let mut vocabulary = Self::default();
        for (label, value) in &extensions.sale_status {
            vocabulary.sale_status.insert(label, *value);
        }
        for (label, value) in &extensions.display_status {
            vocabulary.display_status.insert(label, *value);
        }
        for (label, value) in &extensions.delivery_method {
            vocabulary.delivery_method.insert(label, *value);
        }
        for alias in &extensions.carriers {
            vocabulary.push_carrier_alias(&alias.alias, alias.carrier);
        }
        vocabulary
    }

    pub fn push_carrier_alias(&mut self, alias: &str, carrier: Carrier) {
        let alias = alias.trim();
        if !alias.is_empty() {
            self.carriers.push((alias.to_uppercase(), carrier));
        }
    }

    pub fn carrier_aliases(&self) -> impl Iterator<Item = (&str, Carrier)> {
        self.carriers
            .iter()
            .map(|(alias, carrier)| (alias.as_str(), *carrier))
    }

    pub fn sale_status(
        &self,
        label: Option<&str>,
        default: SaleStatus,
    ) -> Result<SaleStatus, UnknownLabel> {
        self.sale_status.translate(label, default)
    }

    pub fn display_status(
        &self,
        label: Option<&str>,
        default: DisplayStatus,
    ) -> Result<DisplayStatus, UnknownLabel> {
        self.display_status.translate(label, default)
    }

    /// Translate a delivery-method label.
    ///
    /// A label that is not a method but names a carrier ("CJ대한통운") means
    /// courier delivery: one column can carry both.
    pub fn delivery_method(
        &self,
        label: Option<&str>,
        default: DeliveryMethod,
    ) -> Result<DeliveryMethod, UnknownLabel> {
        match self.delivery_method.translate(label, default) {
            Ok(method) => Ok(method),
            Err(err) if self.match_carrier_alias(&err.label).is_some() => {
                debug!(label = %err.label, "delivery method names a carrier; using courier");
                Ok(DeliveryMethod::Courier)
            }
            Err(err) => Err(err),
        }
    }

    /// Resolve free text to a carrier.
    ///
    /// Aliases are tried in order by containment and the first hit wins;
    /// failing that, text equal to a carrier code is accepted. `None` means
    /// unresolved and the caller substitutes its default carrier.
    pub fn carrier(&self, text: &str) -> Option<Carrier> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        self.match_carrier_alias(trimmed)
            .or_else(|| trimmed.parse::<Carrier>().ok())
    }

    /// Infer the carrier from the carrier column, then the method column.
    pub fn infer_carrier(
        &self,
        carrier_text: Option<&str>,
        method_text: Option<&str>,
    ) -> Option<Carrier> {
        carrier_text
            .and_then(|text| self.carrier(text))
            .or_else(|| method_text.and_then(|text| self.carrier(text)))
    }

    fn match_carrier_alias(&self, text: &str) -> Option<Carrier> {
        let haystack = text.to_uppercase();
        self.carriers
            .iter()
            .find(|(alias, _)| haystack.contains(alias.as_str()))
            .map(|(_, carrier)| *carrier)
    }
}
