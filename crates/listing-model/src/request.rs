//! Normalized product-registration request and its nested blocks.
//!
//! Each block is owned by the request that contains it. Blocks are explicit
//! records with named optional fields; downstream serializers map them onto
//! the marketplace wire schema.

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::enums::{Carrier, DeliveryMethod, DisplayStatus, SaleStatus};

/// Origin code for domestically produced goods.
pub const DOMESTIC_ORIGIN_CODE: &str = "00";

/// Generic origin code for imported goods; every import code starts with it.
pub const IMPORT_ORIGIN_CODE: &str = "02";

/// Whether an origin code denotes an imported product.
pub fn is_import_code(code: &str) -> bool {
    code.starts_with(IMPORT_ORIGIN_CODE)
}

/// Result of converting one spreadsheet row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedProductRequest {
    pub name: String,
    pub category_id: String,
    /// Category text as written in the row, kept when it was a path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_path: Option<String>,
    pub sale_price: BigDecimal,
    pub stock_quantity: u64,
    pub detail_content: String,
    /// Image URLs; index 0 is the main image.
    pub images: Vec<String>,
    pub sale_status: SaleStatus,
    pub display_status: DisplayStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery: Option<DeliveryInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_area: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_type: Option<String>,
    pub origin_info: OriginInfo,
    pub certification_info: CertificationInfo,
}

impl NormalizedProductRequest {
    pub fn main_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    pub fn additional_images(&self) -> &[String] {
        self.images.get(1..).unwrap_or_default()
    }
}

/// Delivery settings; only built when the row mentions delivery at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryInfo {
    pub method: DeliveryMethod,
    /// Present only for courier delivery.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carrier: Option<Carrier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee: Option<u64>,
}

/// Country-of-origin metadata.
///
/// Marine-area fields (ocean name/type/area) are deliberately not part of
/// this record: no source for them exists yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OriginInfo {
    #[serde(rename = "originAreaCode")]
    pub code: String,
    pub content: String,
    /// Required by the marketplace for imported goods.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub importer: Option<String>,
}

impl OriginInfo {
    pub fn is_imported(&self) -> bool {
        is_import_code(&self.code)
    }
}

/// A concrete certification record. Never populated yet; see
/// [`CertificationInfo`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificationEntry {
    pub certification_info_id: u64,
    pub certification_kind_type: String,
    pub name: String,
    pub certification_number: String,
}

/// Certification metadata attached to every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificationInfo {
    #[serde(rename = "productCertificationInfos")]
    pub certifications: Vec<CertificationEntry>,
    #[serde(rename = "certificationTargetExcludeContent")]
    pub exclusion: CertificationExclusion,
}

/// Exemption flags; both keys are always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificationExclusion {
    #[serde(rename = "kcCertifiedProductExclusionYn")]
    pub safety: bool,
    #[serde(rename = "childCertifiedProductExclusionYn")]
    pub child: bool,
}
