//! Configuration options for row conversion.

use serde::{Deserialize, Serialize};

use crate::enums::{Carrier, DeliveryMethod, DisplayStatus, SaleStatus};

/// Defaults applied while converting rows.
///
/// Loaded once per batch and shared read-only between conversions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionOptions {
    /// Sale status used when the row leaves it blank.
    pub default_sale_status: SaleStatus,

    /// Display status used when the row leaves it blank.
    pub default_display_status: DisplayStatus,

    /// Delivery method used when only a delivery fee is given.
    pub default_delivery_method: DeliveryMethod,

    /// Fee used when a row gives a delivery method but leaves the fee blank.
    pub default_delivery_fee: u64,

    /// Carrier substituted when courier delivery names no recognizable carrier.
    pub default_carrier: Carrier,

    /// Origin content for rows without a country of origin.
    pub domestic_origin_label: String,

    /// Importer placeholder for imported goods.
    ///
    /// The marketplace requires an importer, which cannot be derived from
    /// the spreadsheet yet.
    pub importer_placeholder: String,

    /// Safety (KC) certification exclusion flag.
    pub safety_certification_exclusion: bool,

    /// Child-product certification exclusion flag.
    pub child_certification_exclusion: bool,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            default_sale_status: SaleStatus::Sale,
            default_display_status: DisplayStatus::On,
            default_delivery_method: DeliveryMethod::Courier,
            default_delivery_fee: 0,
            default_carrier: Carrier::CjLogistics,
            domestic_origin_label: "국내산".to_string(),
            importer_placeholder: "상세페이지 참조".to_string(),
            safety_certification_exclusion: true,
            child_certification_exclusion: true,
        }
    }
}

impl ConversionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_default_carrier(mut self, carrier: Carrier) -> Self {
        self.default_carrier = carrier;
        self
    }

    #[must_use]
    pub fn with_default_delivery_fee(mut self, fee: u64) -> Self {
        self.default_delivery_fee = fee;
        self
    }

    #[must_use]
    pub fn with_importer_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.importer_placeholder = placeholder.into();
        self
    }

    #[must_use]
    pub fn with_domestic_origin_label(mut self, label: impl Into<String>) -> Self {
        self.domestic_origin_label = label.into();
        self
    }

    #[must_use]
    pub fn with_child_certification_exclusion(mut self, exclude: bool) -> Self {
        self.child_certification_exclusion = exclude;
        self
    }
}
