//! Cache key generation and normalization.

use std::fmt;

/// Headers requested from the dataset endpoint when the caller names none.
pub const DEFAULT_DATASET_HEADERS: [&str; 2] = ["NAME", "NATION"];

/// Normalized arguments of one upstream call.
///
/// Dataset headers are sorted and comma-joined on construction, so two
/// requests naming the same headers in a different order map to one key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    /// `/variables` listing for a survey year.
    Variables { year: u32 },
    /// Dataset query for a survey year and `get=` list.
    Dataset { year: u32, headers: String },
}

impl CacheKey {
    pub fn variables(year: u32) -> Self {
        Self::Variables { year }
    }

    /// Creates a dataset key, falling back to [`DEFAULT_DATASET_HEADERS`]
    /// when `headers` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use census_server::cache::CacheKey;
    ///
    /// let a = CacheKey::dataset(2014, ["NATION", "NAME"]);
    /// let b = CacheKey::dataset(2014, ["NAME", "NATION"]);
    /// assert_eq!(a, b);
    /// assert_eq!(a.to_string(), "dataset:2014:NAME,NATION");
    ///
    /// let defaulted = CacheKey::dataset(2014, Vec::<String>::new());
    /// assert_eq!(defaulted, a);
    /// ```
    pub fn dataset<I, S>(year: u32, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        if headers.is_empty() {
            headers = DEFAULT_DATASET_HEADERS.iter().map(|h| h.to_string()).collect();
        }
        headers.sort();

        Self::Dataset {
            year,
            headers: headers.join(","),
        }
    }

    pub fn year(&self) -> u32 {
        match self {
            Self::Variables { year } | Self::Dataset { year, .. } => *year,
        }
    }

    /// Short label of the endpoint this key belongs to.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Variables { .. } => "variables",
            Self::Dataset { .. } => "dataset",
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Variables { year } => write!(f, "variables:{}", year),
            Self::Dataset { year, headers } => write!(f, "dataset:{}:{}", year, headers),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_order_is_normalized() {
        let key1 = CacheKey::dataset(2014, ["NATION", "NAME"]);
        let key2 = CacheKey::dataset(2014, ["NAME", "NATION"]);

        assert_eq!(key1, key2);
        assert_eq!(key1.to_string(), "dataset:2014:NAME,NATION");
    }

    #[test]
    fn test_empty_headers_use_defaults() {
        let key = CacheKey::dataset(2016, Vec::<String>::new());

        assert_eq!(
            key,
            CacheKey::Dataset {
                year: 2016,
                headers: "NAME,NATION".into()
            }
        );
    }

    #[test]
    fn test_sort_is_case_sensitive_lexicographic() {
        let key = CacheKey::dataset(2014, ["b", "A", "a", "B"]);
        assert_eq!(key.to_string(), "dataset:2014:A,B,a,b");
    }

    #[test]
    fn test_duplicates_are_kept() {
        let key = CacheKey::dataset(2014, ["NAME", "NAME"]);
        assert_eq!(key.to_string(), "dataset:2014:NAME,NAME");
    }

    #[test]
    fn test_cache_key_hash() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(CacheKey::dataset(2014, ["NATION", "NAME"]));

        assert!(set.contains(&CacheKey::dataset(2014, ["NAME", "NATION"])));
        assert!(!set.contains(&CacheKey::dataset(2015, ["NAME", "NATION"])));
        assert!(!set.contains(&CacheKey::variables(2014)));
    }

    #[test]
    fn test_accessors() {
        assert_eq!(CacheKey::variables(2014).year(), 2014);
        assert_eq!(CacheKey::variables(2014).kind(), "variables");
        assert_eq!(CacheKey::dataset(2015, ["NAME"]).kind(), "dataset");
    }
}
