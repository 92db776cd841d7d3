//! Registration of numeric fields that expressions may read.

use std::{fmt, rc::Rc};

use indexmap::IndexMap;

/// How a field may be referenced from an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldExposure {
    /// Registered but never readable from an expression.
    Hidden,
    /// Readable once, at parse time, through `static(...)`.
    Static,
    /// Readable on every evaluation through `scalar(...)`.
    Dynamic,
}

impl fmt::Display for FieldExposure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hidden => write!(f, "hidden"),
            Self::Static => write!(f, "static"),
            Self::Dynamic => write!(f, "dynamic"),
        }
    }
}

/// A numeric field together with its exposure tag.
#[derive(Clone)]
pub struct Field {
    exposure: FieldExposure,
    reader: Rc<dyn Fn() -> f64>,
}

impl Field {
    /// Creates a field that reads its value through `reader`.
    pub fn new(exposure: FieldExposure, reader: impl Fn() -> f64 + 'static) -> Self {
        Self {
            exposure,
            reader: Rc::new(reader),
        }
    }

    /// Returns the exposure tag of the field.
    #[must_use]
    pub const fn exposure(&self) -> FieldExposure {
        self.exposure
    }

    /// Reads the current value of the field.
    #[must_use]
    pub fn read(&self) -> f64 {
        (self.reader)()
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("exposure", &self.exposure)
            .field("value", &self.read())
            .finish()
    }
}

/// The fields a module publishes, keyed by name in registration order.
#[derive(Debug, Clone, Default)]
pub struct FieldTable {
    fields: IndexMap<String, Field>,
}

impl FieldTable {
    /// Creates an empty field table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field and returns the table, for building tables inline.
    #[must_use]
    pub fn with(
        mut self,
        name: impl Into<String>,
        exposure: FieldExposure,
        reader: impl Fn() -> f64 + 'static,
    ) -> Self {
        self.insert(name, Field::new(exposure, reader));
        self
    }

    /// Registers a field, replacing any field already registered under `name`.
    pub fn insert(&mut self, name: impl Into<String>, field: Field) {
        self.fields.insert(name.into(), field);
    }

    /// Looks up a field by its exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    /// Iterates over the registered fields in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Field)> {
        self.fields.iter().map(|(name, field)| (name.as_str(), field))
    }

    /// Returns the number of registered fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if no field is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn field_reads_live_value() {
        let value = Rc::new(Cell::new(1.0));
        let field = Field::new(FieldExposure::Dynamic, {
            let value = Rc::clone(&value);
            move || value.get()
        });

        assert_eq!(field.read(), 1.0);
        value.set(2.5);
        assert_eq!(field.read(), 2.5);
    }

    #[test]
    fn table_keeps_registration_order() {
        let table = FieldTable::new()
            .with("b", FieldExposure::Static, || 1.0)
            .with("a", FieldExposure::Hidden, || 2.0);

        let names: Vec<_> = table.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["b", "a"]);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn insert_replaces_existing_field() {
        let mut table = FieldTable::new().with("a", FieldExposure::Static, || 1.0);
        table.insert("a", Field::new(FieldExposure::Dynamic, || 3.0));

        let field = table.get("a").expect("field should be registered");
        assert_eq!(field.exposure(), FieldExposure::Dynamic);
        assert_eq!(field.read(), 3.0);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let table = FieldTable::new().with("threshold", FieldExposure::Static, || 5.0);
        assert!(table.get("Threshold").is_none());
    }
}
