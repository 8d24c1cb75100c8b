//! Category resolution and classification.
//!
//! Both are collaborator seams: the converter only depends on the traits.
//! [`CategoryTable`] and [`RuleClassifier`] are the table- and rule-backed
//! implementations used by the command-line tool and tests.

use serde::{Deserialize, Serialize};

use listing_model::CategoryTable;

/// Whether text is a bare numeric category id.
pub fn is_numeric_id(text: &str) -> bool {
    let trimmed = text.trim();
    !trimmed.is_empty() && trimmed.chars().all(|ch| ch.is_ascii_digit())
}

/// Maps human-readable category paths to category ids.
pub trait CategoryResolver {
    /// Category id for a path, `None` when unknown.
    fn resolve(&self, path: &str) -> Option<String>;

    /// Whether text should be used as an id without resolution.
    fn is_numeric(&self, text: &str) -> bool {
        is_numeric_id(text)
    }
}

impl CategoryResolver for CategoryTable {
    fn resolve(&self, path: &str) -> Option<String> {
        self.get(path).map(str::to_string)
    }
}

/// Category predicates that drive auxiliary-data synthesis.
pub trait CategoryClassifier {
    fn is_safety_cert_required(&self, path: Option<&str>, id: &str) -> bool;
    fn is_child_cert_required(&self, path: Option<&str>, id: &str) -> bool;
    fn is_marine_category(&self, path: Option<&str>) -> bool;
}

/// Inclusive range of category ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdRange {
    pub start: u64,
    pub end: u64,
}

impl IdRange {
    pub fn contains(&self, id: u64) -> bool {
        (self.start..=self.end).contains(&id)
    }
}

/// Matches a category by path keyword or id range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryRule {
    /// Case-insensitive substrings of the category path.
    pub keywords: Vec<String>,
    pub id_ranges: Vec<IdRange>,
}

impl CategoryRule {
    pub fn from_keywords<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
            id_ranges: Vec::new(),
        }
    }

    pub fn matches(&self, path: Option<&str>, id: Option<&str>) -> bool {
        let by_path = path.is_some_and(|path| {
            let path = path.to_lowercase();
            self.keywords
                .iter()
                .filter(|keyword| !keyword.trim().is_empty())
                .any(|keyword| path.contains(&keyword.trim().to_lowercase()))
        });
        let by_id = id
            .and_then(|id| id.trim().parse::<u64>().ok())
            .is_some_and(|id| self.id_ranges.iter().any(|range| range.contains(id)));
        by_path || by_id
    }
}

/// Classifier rules, one per predicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierRules {
    pub safety: CategoryRule,
    pub child: CategoryRule,
    pub marine: CategoryRule,
}

impl Default for ClassifierRules {
    fn default() -> Self {
        Self {
            safety: CategoryRule::from_keywords([
                "디지털/가전",
                "생활/건강>공구",
                "가구/인테리어>인테리어소품>조명",
                "electronics",
                "appliances",
            ]),
            child: CategoryRule::from_keywords([
                "출산/육아",
                "완구",
                "유아",
                "아동",
                "baby",
                "kids",
                "toys",
            ]),
            marine: CategoryRule::from_keywords([
                "수산",
                "해산물",
                "건어물",
                "seafood",
                "fish",
            ]),
        }
    }
}

/// [`CategoryClassifier`] driven by [`ClassifierRules`].
#[derive(Debug, Clone, Default)]
pub struct RuleClassifier {
    rules: ClassifierRules,
}

impl RuleClassifier {
    pub fn new(rules: ClassifierRules) -> Self {
        Self { rules }
    }
}

impl CategoryClassifier for RuleClassifier {
    fn is_safety_cert_required(&self, path: Option<&str>, id: &str) -> bool {
        self.rules.safety.matches(path, Some(id))
    }

    fn is_child_cert_required(&self, path: Option<&str>, id: &str) -> bool {
        self.rules.child.matches(path, Some(id))
    }

    fn is_marine_category(&self, path: Option<&str>) -> bool {
        self.rules.marine.matches(path, None)
    }
}
