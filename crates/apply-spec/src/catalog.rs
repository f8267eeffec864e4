use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::DefinitionError;
use crate::field::Field;

/// Every field a form can show for one `(locale, data)` snapshot, in
/// definition order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct FieldCatalog {
    fields: Vec<Field>,
    #[serde(skip)]
    index: BTreeMap<String, usize>,
}

impl FieldCatalog {
    pub fn new(fields: Vec<Field>) -> Result<Self, DefinitionError> {
        let mut index = BTreeMap::new();
        for (position, field) in fields.iter().enumerate() {
            if index.insert(field.name.clone(), position).is_some() {
                return Err(DefinitionError::DuplicateField(field.name.clone()));
            }
        }

        let catalog = Self { fields, index };
        for (name, values) in catalog.duplicate_option_values() {
            tracing::warn!(field = %name, values = ?values, "field repeats option values");
        }
        Ok(catalog)
    }

    pub fn get(&self, name: &str) -> Result<&Field, DefinitionError> {
        self.index
            .get(name)
            .map(|position| &self.fields[*position])
            .ok_or_else(|| DefinitionError::UnknownField(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Clones the named fields in the order given.
    pub fn pick(&self, names: &[&str]) -> Result<Vec<Field>, DefinitionError> {
        names
            .iter()
            .map(|name| self.get(name).cloned())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|field| field.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Fields whose option lists repeat a value, keyed by field name.
    pub fn duplicate_option_values(&self) -> Vec<(String, Vec<String>)> {
        self.fields
            .iter()
            .filter_map(|field| {
                let duplicates = field.duplicate_option_values();
                (!duplicates.is_empty()).then(|| (field.name.clone(), duplicates))
            })
            .collect()
    }
}
