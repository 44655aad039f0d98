use super::Literal;

use mytable_core::schema::{primitive, ScalarType, TypeRef};

/// A column's SQL storage type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Type {
    /// Upper-cased type name
    pub name: String,

    pub params: Vec<Literal>,

    pub unsigned: bool,

    pub zerofill: bool,
}

impl Type {
    pub fn new(name: impl Into<String>) -> Type {
        Type {
            name: name.into().to_ascii_uppercase(),
            params: vec![],
            unsigned: false,
            zerofill: false,
        }
    }

    /// The structured-text type. Rendered as `JSON` or `MEDIUMTEXT`
    /// depending on the serializer's settings.
    pub fn json() -> Type {
        Type::new("JSON")
    }

    pub fn is_json(&self) -> bool {
        self.name == "JSON"
    }

    /// Containers that reach the emitter are stored as structured text;
    /// element names are stored as their SQL counterpart.
    pub(crate) fn from_schema(ty: &TypeRef) -> Type {
        let TypeRef::Scalar(scalar) = ty else {
            return Type::json();
        };

        let scalar = match primitive::element_storage(&scalar.name) {
            Some(storage) => ScalarType {
                unsigned: scalar.unsigned,
                zerofill: scalar.zerofill,
                ..storage
            },
            None => scalar.clone(),
        };

        Type {
            params: scalar.params,
            unsigned: scalar.unsigned,
            zerofill: scalar.zerofill,
            ..Type::new(scalar.name)
        }
    }
}
