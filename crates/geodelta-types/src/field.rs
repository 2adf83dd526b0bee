use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// Declared type of a field.
///
/// `Any` marks a genuinely untyped or heterogeneous field; values under it
/// are compared by their canonical textual form, which is also the fallback
/// when neither side of a comparison fits the declared type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Bool,
    Int,
    Float,
    Text,
    Any,
}

impl FieldType {
    /// Compare two values under this declared type.
    ///
    /// Nulls compare equal only to nulls. Typed comparison coerces both
    /// sides to the declared type (so int `1` equals float `1.0` under
    /// `Int` or `Float`). A value pair where exactly one side fits the
    /// declared type is a type-only difference and compares unequal.
    /// When neither side fits, or the type is `Text`/`Any`, the canonical
    /// textual forms are compared instead.
    pub fn values_equal(&self, a: &Value, b: &Value) -> bool {
        match (a.is_null(), b.is_null()) {
            (true, true) => return true,
            (true, false) | (false, true) => return false,
            (false, false) => {}
        }

        let typed = match self {
            Self::Bool => coerced_eq(a.as_bool(), b.as_bool()),
            Self::Int => coerced_eq(a.as_int(), b.as_int()),
            Self::Float => coerced_eq(a.as_float(), b.as_float()),
            Self::Text | Self::Any => None,
        };

        typed.unwrap_or_else(|| a.to_string() == b.to_string())
    }
}

/// Typed equality once both sides are coerced: `Some(eq)` when both fit,
/// `Some(false)` when exactly one fits (a type-only difference is a
/// difference), `None` when neither fits and textual fallback applies.
fn coerced_eq<T: PartialEq>(a: Option<T>, b: Option<T>) -> Option<bool> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x == y),
        (Some(_), None) | (None, Some(_)) => Some(false),
        (None, None) => None,
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => write!(f, "bool"),
            Self::Int => write!(f, "int"),
            Self::Float => write!(f, "float"),
            Self::Text => write!(f, "text"),
            Self::Any => write!(f, "any"),
        }
    }
}

/// A named, typed field in a collection schema.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Field name, unique within a schema.
    pub name: String,
    /// Declared type.
    pub ty: FieldType,
}

impl Field {
    /// Create a new field.
    pub fn new(name: impl Into<String>, ty: FieldType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nulls_equal_only_nulls() {
        for ty in [
            FieldType::Bool,
            FieldType::Int,
            FieldType::Float,
            FieldType::Text,
            FieldType::Any,
        ] {
            assert!(ty.values_equal(&Value::Null, &Value::Null));
            assert!(!ty.values_equal(&Value::Null, &Value::Int(0)));
            assert!(!ty.values_equal(&Value::Text("NULL".into()), &Value::Null));
        }
    }

    #[test]
    fn int_field_coerces_integral_float() {
        let ty = FieldType::Int;
        assert!(ty.values_equal(&Value::Int(1), &Value::Float(1.0)));
        assert!(!ty.values_equal(&Value::Int(1), &Value::Int(2)));
    }

    #[test]
    fn typed_int_distinguishes_text_one() {
        // int 1 vs text "1" is a type-only difference under Int, but the
        // untyped fallback (Any) keeps the original string-cast behavior.
        assert!(!FieldType::Int.values_equal(&Value::Int(1), &Value::Text("1".into())));
        assert!(FieldType::Any.values_equal(&Value::Int(1), &Value::Text("1".into())));
    }

    #[test]
    fn unfit_pair_falls_back_to_text() {
        assert!(FieldType::Int.values_equal(&Value::Text("abc".into()), &Value::Text("abc".into())));
        assert!(!FieldType::Int.values_equal(&Value::Text("abc".into()), &Value::Text("abd".into())));
    }

    #[test]
    fn float_field_compares_numerically() {
        assert!(FieldType::Float.values_equal(&Value::Int(2), &Value::Float(2.0)));
        assert!(!FieldType::Float.values_equal(&Value::Float(2.0), &Value::Float(2.1)));
    }

    #[test]
    fn any_field_compares_textually() {
        assert!(FieldType::Any.values_equal(&Value::Bool(true), &Value::Text("true".into())));
        assert!(!FieldType::Any.values_equal(&Value::Bool(true), &Value::Text("TRUE".into())));
    }

    #[test]
    fn bool_field_one_sided_fit_differs() {
        // bool true vs text "true": only one side is a real bool.
        assert!(!FieldType::Bool.values_equal(&Value::Bool(true), &Value::Text("true".into())));
    }

    #[test]
    fn display_names() {
        assert_eq!(FieldType::Int.to_string(), "int");
        assert_eq!(FieldType::Any.to_string(), "any");
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn any_value() -> impl Strategy<Value = Value> {
            prop_oneof![
                Just(Value::Null),
                any::<bool>().prop_map(Value::Bool),
                any::<i64>().prop_map(Value::Int),
                (-1.0e9f64..1.0e9).prop_map(Value::Float),
                "[a-z0-9]{0,8}".prop_map(Value::Text),
            ]
        }

        fn any_field_type() -> impl Strategy<Value = FieldType> {
            proptest::sample::select(vec![
                FieldType::Bool,
                FieldType::Int,
                FieldType::Float,
                FieldType::Text,
                FieldType::Any,
            ])
        }

        proptest! {
            #[test]
            fn equality_is_reflexive(v in any_value(), ty in any_field_type()) {
                prop_assert!(ty.values_equal(&v, &v));
            }

            #[test]
            fn equality_is_symmetric(
                a in any_value(),
                b in any_value(),
                ty in any_field_type(),
            ) {
                prop_assert_eq!(ty.values_equal(&a, &b), ty.values_equal(&b, &a));
            }
        }
    }
}
