//! Read-only lookup tables shared across a batch.

use std::collections::HashMap;

/// Category path -> category id.
///
/// Paths are compared after splitting on `>` or `/`, trimming each segment
/// and folding ASCII case, so `"Food > Snacks"` and `"food/snacks"` are the
/// same key.
#[derive(Debug, Clone, Default)]
pub struct CategoryTable {
    by_path: HashMap<String, String>,
}

impl CategoryTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, P, C>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (P, C)>,
        P: AsRef<str>,
        C: Into<String>,
    {
        let mut table = Self::new();
        for (path, id) in pairs {
            table.insert(path.as_ref(), id);
        }
        table
    }

    /// Add a mapping; the first id registered for a path is kept.
    pub fn insert(&mut self, path: &str, id: impl Into<String>) {
        let key = category_path_key(path);
        if key.is_empty() {
            return;
        }
        self.by_path.entry(key).or_insert_with(|| id.into());
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.by_path
            .get(&category_path_key(path))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_path.is_empty()
    }
}

/// Normalized comparison key for a category path.
pub fn category_path_key(path: &str) -> String {
    path.split(['>', '/'])
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join(">")
}

/// Country name -> origin code, in insertion order.
///
/// Order matters: partial matches are tried in table order and the first
/// hit wins.
#[derive(Debug, Clone, Default)]
pub struct OriginTable {
    entries: Vec<(String, String)>,
}

impl OriginTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, N, C>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (N, C)>,
        N: Into<String>,
        C: Into<String>,
    {
        let mut table = Self::new();
        for (name, code) in pairs {
            table.push(name, code);
        }
        table
    }

    /// Append an entry; blank names are ignored.
    pub fn push(&mut self, name: impl Into<String>, code: impl Into<String>) {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return;
        }
        self.entries.push((name, code.into().trim().to_string()));
    }

    /// Exact, case-insensitive name match.
    pub fn exact(&self, name: &str) -> Option<&str> {
        let needle = name.trim().to_lowercase();
        self.entries
            .iter()
            .find(|(key, _)| key.to_lowercase() == needle)
            .map(|(_, code)| code.as_str())
    }

    /// First entry whose name contains the input or is contained by it.
    pub fn partial(&self, name: &str) -> Option<&str> {
        let needle = name.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .find(|(key, _)| {
                let key = key.to_lowercase();
                key.contains(&needle) || needle.contains(&key)
            })
            .map(|(_, code)| code.as_str())
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, code)| (name.as_str(), code.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Extend<(String, String)> for OriginTable {
    fn extend<T: IntoIterator<Item = (String, String)>>(&mut self, iter: T) {
        for (name, code) in iter {
            self.push(name, code);
        }
    }
}
