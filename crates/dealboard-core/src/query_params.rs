use std::collections::BTreeMap;

/// A query-string value: `?id=x` parses to `Single`, repeated keys
/// like `?companyIds=a&companyIds=b` collect into `Multi`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Single(String),
    Multi(Vec<String>),
}

impl ParamValue {
    /// The scalar form of the value; for `Multi` the first entry.
    pub fn first(&self) -> &str {
        match self {
            ParamValue::Single(value) => value,
            ParamValue::Multi(values) => values.first().map(String::as_str).unwrap_or(""),
        }
    }

    pub fn values(&self) -> Vec<String> {
        match self {
            ParamValue::Single(value) => vec![value.clone()],
            ParamValue::Multi(values) => values.clone(),
        }
    }
}

/// The parsed URL search string, recomputed from the live URL on every
/// render pass and never cached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: BTreeMap<String, ParamValue>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a URL search string; a leading `?` is tolerated.
    pub fn parse(search: &str) -> Self {
        let trimmed = search.strip_prefix('?').unwrap_or(search);
        let mut params = QueryParams::new();
        for (key, value) in form_urlencoded::parse(trimmed.as_bytes()) {
            params.append(key.into_owned(), value.into_owned());
        }
        params
    }

    /// Serializes back to a search string without the leading `?`.
    /// `Multi` values re-emit one pair per value in their stored order.
    pub fn to_search(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.entries {
            match value {
                ParamValue::Single(value) => {
                    serializer.append_pair(key, value);
                }
                ParamValue::Multi(values) => {
                    for value in values {
                        serializer.append_pair(key, value);
                    }
                }
            }
        }
        serializer.finish()
    }

    fn append(&mut self, key: String, value: String) {
        match self.entries.remove(&key) {
            None => {
                self.entries.insert(key, ParamValue::Single(value));
            }
            Some(ParamValue::Single(existing)) => {
                self.entries.insert(key, ParamValue::Multi(vec![existing, value]));
            }
            Some(ParamValue::Multi(mut existing)) => {
                existing.push(value);
                self.entries.insert(key, ParamValue::Multi(existing));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.get(key)
    }

    /// The scalar value for `key`, if the key is present at all.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(ParamValue::first)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), ParamValue::Single(value.into()));
    }

    pub fn insert_multi(&mut self, key: impl Into<String>, values: Vec<String>) {
        self.entries.insert(key.into(), ParamValue::Multi(values));
    }

    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        self.entries.remove(key)
    }

    /// Merges `other` into `self`, overwriting on key collisions.
    pub fn merge(&mut self, other: QueryParams) {
        for (key, value) in other.entries {
            self.entries.insert(key, value);
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
