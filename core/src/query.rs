//! Query-string construction for example requests.

use url::form_urlencoded;

/// Strip exactly one trailing `/` from a base URL.
pub fn trim_base_url(base_url: &str) -> &str {
    base_url.strip_suffix('/').unwrap_or(base_url)
}

/// Build `{base}{path}?{query}`.
///
/// Parameters with an empty value are left out; everything else (including
/// `"0"`) is form-urlencoded in input order. The `?` is always present, even
/// when nothing survives the filter.
pub fn build_url<I, K, V>(base_url: &str, path_template: &str, params: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut query = form_urlencoded::Serializer::new(String::new());
    for (name, value) in params {
        if !value.as_ref().is_empty() {
            query.append_pair(name.as_ref(), value.as_ref());
        }
    }
    format!("{}{}?{}", trim_base_url(base_url), path_template, query.finish())
}

/// A path template plus its ordered, uniquely keyed parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryRequest {
    pub path_template: String,
    params: Vec<(String, String)>,
}

impl QueryRequest {
    pub fn new(path_template: impl Into<String>) -> Self {
        Self {
            path_template: path_template.into(),
            params: Vec::new(),
        }
    }

    /// Set a parameter. An existing key keeps its position.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let name = name.into();
        let value = value.into();
        match self.params.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.params.push((name, value)),
        }
        self
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    pub fn to_url(&self, base_url: &str) -> String {
        build_url(base_url, &self.path_template, self.params.iter().map(|(k, v)| (k, v)))
    }
}
