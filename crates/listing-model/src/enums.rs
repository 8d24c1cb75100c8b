//! Closed enumerations for the marketplace's controlled vocabularies.
//!
//! Each variant carries the API code the marketplace expects on the wire.
//! Free-text spreadsheet labels are translated to these by the vocabulary
//! tables in `listing-transform`; this module only knows the codes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a string is not a known API code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} code '{value}'")]
pub struct UnknownCode {
    pub kind: &'static str,
    pub value: String,
}

macro_rules! api_code_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $code:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $code)] $variant ),+
        }

        impl $name {
            /// All variants in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// API code sent to the marketplace.
            pub fn code(self) -> &'static str {
                match self {
                    $($name::$variant => $code),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.code())
            }
        }

        impl FromStr for $name {
            type Err = UnknownCode;

            /// Parse an API code (case-insensitive).
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|value| value.code().eq_ignore_ascii_case(trimmed))
                    .ok_or_else(|| UnknownCode {
                        kind: $kind,
                        value: trimmed.to_string(),
                    })
            }
        }
    };
}

api_code_enum! {
    /// Sale status of the origin product.
    SaleStatus, "sale status" {
        /// On sale.
        Sale => "SALE",
        OutOfStock => "OUTOFSTOCK",
        Suspension => "SUSPENSION",
        Close => "CLOSE",
        Prohibition => "PROHIBITION",
    }
}

api_code_enum! {
    /// Display status of the channel product.
    DisplayStatus, "display status" {
        /// Visible in the storefront.
        On => "ON",
        Suspension => "SUSPENSION",
    }
}

api_code_enum! {
    /// How the product is delivered.
    DeliveryMethod, "delivery method" {
        /// Parcel courier; requires a carrier.
        Courier => "DELIVERY",
        /// Seller delivers directly (freight, own vehicle).
        Direct => "DIRECT",
    }
}

api_code_enum! {
    /// Parcel carriers recognized by the marketplace.
    Carrier, "carrier" {
        CjLogistics => "CJGLS",
        Hanjin => "HANJIN",
        /// Lotte Global Logistics keeps its legacy code.
        Lotte => "HYUNDAI",
        Logen => "KGB",
        KoreaPost => "EPOST",
        Kyungdong => "KDEXP",
        Daesin => "DAESIN",
        CuPost => "CUPARCEL",
        GsPostbox => "CVSNET",
    }
}

impl DeliveryMethod {
    /// Whether a carrier must accompany this method.
    pub fn requires_carrier(self) -> bool {
        matches!(self, DeliveryMethod::Courier)
    }
}
