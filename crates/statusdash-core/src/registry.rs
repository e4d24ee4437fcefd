//! Insertion-ordered attribute registry.

use std::collections::HashMap;

use tracing::debug;

use crate::attribute::DisplayAttribute;
use crate::error::{DashError, Result};
use crate::value::AttributeValue;

/// Attributes of one dashboard, in registration order.
#[derive(Debug, Default)]
pub struct AttributeRegistry {
    entries: Vec<DisplayAttribute>,
    index: HashMap<String, usize>,
}

impl AttributeRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an attribute. Fails without changes if the name is taken.
    pub fn insert(&mut self, attr: DisplayAttribute) -> Result<()> {
        if self.index.contains_key(attr.name()) {
            return Err(DashError::DuplicateAttribute(attr.name().to_string()));
        }
        debug!(name = attr.name(), kind = %attr.kind(), "registered attribute");
        self.index.insert(attr.name().to_string(), self.entries.len());
        self.entries.push(attr);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&DisplayAttribute> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Validate an update without applying it.
    pub fn check_update(&self, name: &str, value: &AttributeValue) -> Result<&DisplayAttribute> {
        let attr = self
            .get(name)
            .ok_or_else(|| DashError::UnknownAttribute(name.to_string()))?;
        attr.accepts(value)?;
        Ok(attr)
    }

    /// Validate and store a value, returning the updated attribute.
    pub fn set_value(&mut self, name: &str, value: AttributeValue) -> Result<&DisplayAttribute> {
        self.check_update(name, &value)?;
        let attr = &mut self.entries[self.index[name]];
        attr.set_value(value);
        Ok(attr)
    }

    /// Attributes in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &DisplayAttribute> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }
}
