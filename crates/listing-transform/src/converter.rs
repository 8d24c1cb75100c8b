//! Row converter: one spreadsheet row in, one normalized request out.
//!
//! Required fields are checked in column order and the first violation is
//! returned. [`RowConverter::validate`] runs every check independently for
//! callers that want the full list of problems in a row.

use bigdecimal::{BigDecimal, Zero};
use tracing::{debug, debug_span, trace, warn};

use listing_model::{
    CoercionWarning, Column, ConversionOptions, DeliveryInfo, DisplayStatus,
    NormalizedProductRequest, OriginTable, RawRow, SaleStatus, ValidationError,
};

use crate::category::{CategoryClassifier, CategoryResolver};
use crate::certification::CertificationSynthesizer;
use crate::coerce::{Coerced, count_cell, decimal_cell};
use crate::origin::OriginSynthesizer;
use crate::vocabulary::{UnknownLabel, Vocabulary};

type Result<T> = std::result::Result<T, ValidationError>;

/// Category as resolved for one row.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ResolvedCategory {
    id: String,
    /// Original text when it was a path rather than an id.
    path: Option<String>,
}

/// Converts [`RawRow`]s into [`NormalizedProductRequest`]s.
///
/// Holds only shared references to read-only lookup data, so one converter
/// can serve any number of rows, from any number of threads when the
/// collaborators are `Sync`.
pub struct RowConverter<'a, R: ?Sized, C: ?Sized> {
    options: &'a ConversionOptions,
    vocabulary: &'a Vocabulary,
    resolver: &'a R,
    classifier: &'a C,
    origins: &'a OriginTable,
}

impl<'a, R, C> RowConverter<'a, R, C>
where
    R: CategoryResolver + ?Sized,
    C: CategoryClassifier + ?Sized,
{
    pub fn new(
        options: &'a ConversionOptions,
        vocabulary: &'a Vocabulary,
        resolver: &'a R,
        classifier: &'a C,
        origins: &'a OriginTable,
    ) -> Self {
        Self {
            options,
            vocabulary,
            resolver,
            classifier,
            origins,
        }
    }

    /// Convert one row, failing on the first violated rule.
    pub fn convert(&self, row: &RawRow) -> Result<NormalizedProductRequest> {
        let _span = debug_span!("convert_row", row = row.index()).entered();

        let name = required_text(row, Column::Name)?;
        let category = self.category(row)?;
        let sale_price = sale_price(row)?;
        let stock_quantity = stock_quantity(row)?;
        let detail_content = required_text(row, Column::DetailContent)?;
        let images = images(row)?;
        let sale_status = self.sale_status(row)?;
        let display_status = self.display_status(row)?;
        let delivery = self.delivery(row)?;

        let brand = optional_text(row, Column::Brand);
        let model = optional_text(row, Column::Model);
        let manufacturer = optional_text(row, Column::Manufacturer);
        let origin_area = optional_text(row, Column::OriginArea);
        let tax_type = optional_text(row, Column::TaxType).map(|tax| tax.to_uppercase());

        let origin_info = OriginSynthesizer::new(self.options, self.classifier).synthesize(
            origin_area.as_deref(),
            category.path.as_deref(),
            self.origins,
        );
        let certification_info = CertificationSynthesizer::new(self.options, self.classifier)
            .synthesize(category.path.as_deref(), &category.id);

        debug!(
            category_id = %category.id,
            price = %sale_price,
            stock = stock_quantity,
            images = images.len(),
            "row converted"
        );

        Ok(NormalizedProductRequest {
            name,
            category_id: category.id,
            category_path: category.path,
            sale_price,
            stock_quantity,
            detail_content,
            images,
            sale_status,
            display_status,
            delivery,
            brand,
            model,
            manufacturer,
            origin_area,
            tax_type,
            origin_info,
            certification_info,
        })
    }

    /// Run every field rule and collect all violations (empty when the row
    /// converts).
    pub fn validate(&self, row: &RawRow) -> Vec<ValidationError> {
        let _span = debug_span!("validate_row", row = row.index()).entered();
        [
            required_text(row, Column::Name).err(),
            self.category(row).err(),
            sale_price(row).err(),
            stock_quantity(row).err(),
            required_text(row, Column::DetailContent).err(),
            images(row).err(),
            self.sale_status(row).err(),
            self.display_status(row).err(),
            self.delivery(row).err(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn category(&self, row: &RawRow) -> Result<ResolvedCategory> {
        let text = required_text(row, Column::Category)?;
        if self.resolver.is_numeric(&text) {
            trace!(category_id = %text, "category given as id");
            return Ok(ResolvedCategory {
                id: text,
                path: None,
            });
        }
        match self.resolver.resolve(&text) {
            Some(id) => {
                debug!(path = %text, category_id = %id, "category path resolved");
                Ok(ResolvedCategory {
                    id,
                    path: Some(text),
                })
            }
            None => Err(ValidationError::CategoryNotFound {
                row: row.index(),
                path: text,
            }),
        }
    }

    fn sale_status(&self, row: &RawRow) -> Result<SaleStatus> {
        let label = row.text(Column::SaleStatus);
        self.vocabulary
            .sale_status(label.as_deref(), self.options.default_sale_status)
            .map_err(|err| label_error(row, Column::SaleStatus, err))
    }

    fn display_status(&self, row: &RawRow) -> Result<DisplayStatus> {
        let label = row.text(Column::DisplayStatus);
        self.vocabulary
            .display_status(label.as_deref(), self.options.default_display_status)
            .map_err(|err| label_error(row, Column::DisplayStatus, err))
    }

    /// Delivery block, built only when the row gives a method or a fee.
    ///
    /// A blank fee takes the configured default; an unparsable one is dropped.
    fn delivery(&self, row: &RawRow) -> Result<Option<DeliveryInfo>> {
        let method_text = row.text(Column::DeliveryMethod);
        let fee_cell = row.value(Column::DeliveryFee);
        if method_text.is_none() && fee_cell.is_none_or(|cell| cell.is_blank()) {
            trace!("no delivery fields; leaving delivery to defaults downstream");
            return Ok(None);
        }

        let method = self
            .vocabulary
            .delivery_method(method_text.as_deref(), self.options.default_delivery_method)
            .map_err(|err| label_error(row, Column::DeliveryMethod, err))?;

        let carrier = if method.requires_carrier() {
            let carrier_text = row.text(Column::DeliveryCompany);
            let carrier = self
                .vocabulary
                .infer_carrier(carrier_text.as_deref(), method_text.as_deref())
                .unwrap_or_else(|| {
                    debug!(
                        carrier = carrier_text.as_deref().unwrap_or_default(),
                        default = %self.options.default_carrier,
                        "carrier unresolved; using default"
                    );
                    self.options.default_carrier
                });
            Some(carrier)
        } else {
            None
        };

        let fee = match count_cell(fee_cell) {
            Coerced::Absent => {
                trace!(fee = self.options.default_delivery_fee, "no delivery fee; using default");
                Some(self.options.default_delivery_fee)
            }
            Coerced::Value(fee) => match u64::try_from(fee) {
                Ok(fee) => Some(fee),
                Err(_) => {
                    coercion_warning(row, Column::DeliveryFee, &fee.to_string());
                    None
                }
            },
            Coerced::Malformed(raw) => {
                coercion_warning(row, Column::DeliveryFee, &raw);
                None
            }
        };

        Ok(Some(DeliveryInfo {
            method,
            carrier,
            fee,
        }))
    }
}

fn required_text(row: &RawRow, column: Column) -> Result<String> {
    let value = row
        .text(column)
        .ok_or_else(|| ValidationError::missing(row.index(), column))?;
    trace!(field = %column, value = %value, "trimmed");
    Ok(value)
}

fn optional_text(row: &RawRow, column: Column) -> Option<String> {
    let value = row.text(column)?;
    trace!(field = %column, value = %value, "trimmed");
    Some(value)
}

fn sale_price(row: &RawRow) -> Result<BigDecimal> {
    let column = Column::SalePrice;
    match decimal_cell(row.value(column)) {
        Coerced::Absent => Err(ValidationError::missing(row.index(), column)),
        Coerced::Malformed(raw) => {
            coercion_warning(row, column, &raw);
            Err(ValidationError::invalid(
                row.index(),
                column,
                raw,
                "not a number",
            ))
        }
        Coerced::Value(price) if price <= BigDecimal::zero() => Err(ValidationError::invalid(
            row.index(),
            column,
            price.to_string(),
            "must be greater than zero",
        )),
        Coerced::Value(price) => Ok(price),
    }
}

fn stock_quantity(row: &RawRow) -> Result<u64> {
    let column = Column::StockQuantity;
    match count_cell(row.value(column)) {
        Coerced::Absent => Err(ValidationError::missing(row.index(), column)),
        Coerced::Malformed(raw) => {
            coercion_warning(row, column, &raw);
            Err(ValidationError::invalid(
                row.index(),
                column,
                raw,
                "not a number",
            ))
        }
        Coerced::Value(count) => u64::try_from(count).map_err(|_| {
            let raw = row.text(column).unwrap_or_else(|| count.to_string());
            ValidationError::invalid(row.index(), column, raw, "must not be negative")
        }),
    }
}

fn images(row: &RawRow) -> Result<Vec<String>> {
    let mut images = vec![required_text(row, Column::MainImage)?];
    if let Some(additional) = optional_text(row, Column::AdditionalImage) {
        images.push(additional);
    }
    Ok(images)
}

fn label_error(row: &RawRow, column: Column, err: UnknownLabel) -> ValidationError {
    ValidationError::invalid(row.index(), column, err.label, "not a recognized label")
}

fn coercion_warning(row: &RawRow, column: Column, raw: &str) {
    let warning = CoercionWarning::new(row.index(), column, raw);
    warn!(row = warning.row, field = %warning.field, value = %warning.value, "{warning}");
}
