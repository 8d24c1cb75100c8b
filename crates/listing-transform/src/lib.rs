//! Row-to-request conversion for marketplace product registration.
//!
//! - **coerce**: numeric coercion of loosely-typed cells
//! - **vocabulary**: status / delivery / carrier label translation
//! - **category**: category resolver and classifier seams
//! - **origin**: country-of-origin block synthesis
//! - **certification**: certification exclusion block synthesis
//! - **converter**: the row converter tying the above together
//!
//! The crate performs no I/O; lookup tables are passed in by reference and
//! never mutated.

pub mod category;
pub mod certification;
pub mod coerce;
pub mod converter;
pub mod origin;
pub mod vocabulary;

pub use category::{
    CategoryClassifier, CategoryResolver, CategoryRule, ClassifierRules, IdRange, RuleClassifier,
    is_numeric_id,
};
pub use certification::CertificationSynthesizer;
pub use converter::RowConverter;
pub use origin::OriginSynthesizer;
pub use vocabulary::{CarrierAlias, LabelTable, UnknownLabel, Vocabulary, VocabularyExtensions};
