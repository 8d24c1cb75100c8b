//! Certification block synthesis.
//!
//! No certification record ids are known for spreadsheet products, so every
//! product is declared out of scope for both certification types. The
//! required / not-required branches are kept separate so real certification
//! ids can be attached to the required branch later.

use tracing::debug;

use listing_model::{CertificationExclusion, CertificationInfo, ConversionOptions};

use crate::category::CategoryClassifier;

/// Builds [`CertificationInfo`] blocks.
pub struct CertificationSynthesizer<'a, C: ?Sized> {
    options: &'a ConversionOptions,
    classifier: &'a C,
}

impl<'a, C: CategoryClassifier + ?Sized> CertificationSynthesizer<'a, C> {
    pub fn new(options: &'a ConversionOptions, classifier: &'a C) -> Self {
        Self {
            options,
            classifier,
        }
    }

    pub fn synthesize(&self, category_path: Option<&str>, category_id: &str) -> CertificationInfo {
        let safety = if self
            .classifier
            .is_safety_cert_required(category_path, category_id)
        {
            debug!(
                category_id,
                "safety certification required; no certification id, declaring exclusion"
            );
            self.options.safety_certification_exclusion
        } else {
            debug!(category_id, "safety certification not required");
            self.options.safety_certification_exclusion
        };

        let child = if self
            .classifier
            .is_child_cert_required(category_path, category_id)
        {
            debug!(
                category_id,
                "child certification required; no certification id, declaring exclusion"
            );
            self.options.child_certification_exclusion
        } else {
            debug!(category_id, "child certification not required");
            self.options.child_certification_exclusion
        };

        CertificationInfo {
            certifications: Vec::new(),
            exclusion: CertificationExclusion { safety, child },
        }
    }
}
