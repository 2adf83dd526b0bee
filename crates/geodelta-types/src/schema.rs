use serde::{Deserialize, Serialize};

use crate::field::{Field, FieldType};

/// An ordered, named field schema shared by every record of a collection.
///
/// Field order is significant: the diff output schema is defined as the new
/// collection's fields, in order, plus a trailing change-type field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    fields: Vec<Field>,
}

impl Schema {
    /// Create a schema from an ordered field list.
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Create an empty schema.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the schema has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Look up a field by name. Returns the first match.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Returns `true` if a field with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Iterate the fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    /// Append a field, returning the extended schema.
    pub fn with_field(&self, name: impl Into<String>, ty: FieldType) -> Self {
        let mut fields = self.fields.clone();
        fields.push(Field::new(name, ty));
        Self { fields }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Schema {
        Schema::new(vec![
            Field::new("id", FieldType::Int),
            Field::new("name", FieldType::Text),
        ])
    }

    #[test]
    fn lookup_by_name() {
        let schema = sample();
        assert_eq!(schema.field("id").unwrap().ty, FieldType::Int);
        assert!(schema.field("missing").is_none());
        assert!(schema.contains("name"));
    }

    #[test]
    fn order_is_preserved() {
        let schema = sample();
        let names: Vec<_> = schema.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["id", "name"]);
    }

    #[test]
    fn with_field_appends_trailing() {
        let schema = sample().with_field("change_type", FieldType::Text);
        assert_eq!(schema.len(), 3);
        let last = schema.iter().last().unwrap();
        assert_eq!(last.name, "change_type");
        assert_eq!(last.ty, FieldType::Text);
    }

    #[test]
    fn empty_schema() {
        assert!(Schema::empty().is_empty());
        assert_eq!(Schema::empty().len(), 0);
    }
}
