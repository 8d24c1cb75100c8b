//! Spreadsheet columns recognized by the converter.
//!
//! Sellers fill in either the Korean template headers or English ones, so
//! each column carries a list of accepted header labels. Header matching
//! ignores whitespace, underscores and hyphens, and folds ASCII case.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A logical product field read from a spreadsheet row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Name,
    Category,
    SalePrice,
    StockQuantity,
    DetailContent,
    MainImage,
    AdditionalImage,
    SaleStatus,
    DisplayStatus,
    DeliveryMethod,
    DeliveryCompany,
    DeliveryFee,
    Brand,
    Model,
    Manufacturer,
    OriginArea,
    TaxType,
}

impl Column {
    /// All columns in template order.
    pub const ALL: [Column; 17] = [
        Column::Name,
        Column::Category,
        Column::SalePrice,
        Column::StockQuantity,
        Column::DetailContent,
        Column::MainImage,
        Column::AdditionalImage,
        Column::SaleStatus,
        Column::DisplayStatus,
        Column::DeliveryMethod,
        Column::DeliveryCompany,
        Column::DeliveryFee,
        Column::Brand,
        Column::Model,
        Column::Manufacturer,
        Column::OriginArea,
        Column::TaxType,
    ];

    /// Human-readable field name used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            Column::Name => "name",
            Column::Category => "category",
            Column::SalePrice => "sale price",
            Column::StockQuantity => "stock quantity",
            Column::DetailContent => "detail content",
            Column::MainImage => "main image",
            Column::AdditionalImage => "additional image",
            Column::SaleStatus => "sale status",
            Column::DisplayStatus => "display status",
            Column::DeliveryMethod => "delivery method",
            Column::DeliveryCompany => "delivery company",
            Column::DeliveryFee => "delivery fee",
            Column::Brand => "brand",
            Column::Model => "model",
            Column::Manufacturer => "manufacturer",
            Column::OriginArea => "origin area",
            Column::TaxType => "tax type",
        }
    }

    /// Header labels accepted for this column.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Column::Name => &["상품명", "name", "product name"],
            Column::Category => &["카테고리", "카테고리ID", "category", "category id"],
            Column::SalePrice => &["판매가", "가격", "price", "sale price"],
            Column::StockQuantity => &["재고수량", "재고", "stock", "stock quantity"],
            Column::DetailContent => &["상세설명", "상세내용", "detail", "detail content"],
            Column::MainImage => &["대표이미지", "대표이미지URL", "main image", "main image url"],
            Column::AdditionalImage => &[
                "추가이미지",
                "추가이미지URL",
                "additional image",
                "additional image url",
            ],
            Column::SaleStatus => &["판매상태", "sale status"],
            Column::DisplayStatus => &["전시상태", "display status"],
            Column::DeliveryMethod => &["배송방법", "delivery method"],
            Column::DeliveryCompany => &["택배사", "delivery company", "carrier"],
            Column::DeliveryFee => &["배송비", "delivery fee"],
            Column::Brand => &["브랜드", "brand"],
            Column::Model => &["모델명", "model"],
            Column::Manufacturer => &["제조사", "manufacturer"],
            Column::OriginArea => &["원산지", "origin", "origin area"],
            Column::TaxType => &["부가세", "과세유형", "tax type"],
        }
    }

    /// Whether an absent value fails conversion.
    pub fn is_required(self) -> bool {
        matches!(
            self,
            Column::Name
                | Column::Category
                | Column::SalePrice
                | Column::StockQuantity
                | Column::DetailContent
                | Column::MainImage
        )
    }

    /// Find the column a header label refers to.
    pub fn from_header(header: &str) -> Option<Column> {
        let key = header_key(header);
        if key.is_empty() {
            return None;
        }
        Column::ALL
            .into_iter()
            .find(|column| column.aliases().iter().any(|alias| header_key(alias) == key))
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Comparison key for header labels.
pub fn header_key(label: &str) -> String {
    label
        .trim()
        .trim_matches('\u{feff}')
        .chars()
        .filter(|ch| !ch.is_whitespace() && *ch != '_' && *ch != '-')
        .map(|ch| ch.to_ascii_lowercase())
        .collect()
}
