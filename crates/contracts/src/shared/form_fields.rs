/// Ordered text parts of a multipart submission.
///
/// File parts are attached by the frontend when it turns this into a browser
/// `FormData`; everything textual is decided here so it can be checked
/// without a browser.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    fields: Vec<(String, String)>,
}

/// Laravel-style method override field used when a multipart body has to
/// travel over `POST`.
pub const METHOD_FIELD: &str = "_method";

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a body that will be sent as `POST` but routed as `method`.
    pub fn with_method(method: &str) -> Self {
        let mut fields = Self::new();
        fields.push(METHOD_FIELD, method);
        fields
    }

    pub fn push(&mut self, key: &str, value: impl Into<String>) -> &mut Self {
        self.fields.push((key.to_string(), value.into()));
        self
    }

    /// Push only when the trimmed value is non-empty.
    pub fn push_non_empty(&mut self, key: &str, value: &str) -> &mut Self {
        if !value.trim().is_empty() {
            self.push(key, value);
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_override_first() {
        let mut f = FormFields::with_method("PUT");
        f.push("name", "Acme").push_non_empty("note", "   ");
        let collected: Vec<_> = f.iter().collect();
        assert_eq!(collected, vec![("_method", "PUT"), ("name", "Acme")]);
        assert!(!f.contains("note"));
    }
}
