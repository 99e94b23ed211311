//! Value search
//!
//! Case-insensitive substring match on name or description, optionally
//! narrowed to one category. Order of the source list is kept.

use crate::domain::Value;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueFilter {
    pub query: String,
    /// Exact category to require; `None` passes every category
    pub category: Option<String>,
}

impl ValueFilter {
    pub fn new(query: impl Into<String>) -> Self {
        ValueFilter {
            query: query.into(),
            category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn matches(&self, value: &Value) -> bool {
        let query = self.query.to_lowercase();
        let text_match = value.name.to_lowercase().contains(&query)
            || value.description.to_lowercase().contains(&query);

        let category_match = match &self.category {
            Some(selected) => value.category.as_deref() == Some(selected.as_str()),
            None => true,
        };

        text_match && category_match
    }

    pub fn apply<'a>(&self, values: &'a [Value]) -> Vec<&'a Value> {
        values.iter().filter(|v| self.matches(v)).collect()
    }
}
