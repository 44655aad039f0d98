use super::{primitive, Literal};

use std::fmt;

/// The declared type of a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    /// A primitive SQL type, or a reference to a declared table-type used as
    /// an embedded single value.
    Scalar(ScalarType),

    /// An ordered collection.
    ListOf(Box<TypeRef>),

    /// An unordered key/value collection.
    MapOf(Box<TypeRef>, Box<TypeRef>),

    /// A schema-less payload. Only valid as a map value.
    Opaque,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarType {
    /// Type name as written
    pub name: String,

    /// Length, precision/scale, or enumerated values
    pub params: Vec<Literal>,

    pub unsigned: bool,

    pub zerofill: bool,
}

impl TypeRef {
    pub fn scalar(name: impl Into<String>) -> TypeRef {
        TypeRef::Scalar(ScalarType::new(name))
    }

    pub fn list_of(inner: TypeRef) -> TypeRef {
        TypeRef::ListOf(Box::new(inner))
    }

    pub fn map_of(key: TypeRef, value: TypeRef) -> TypeRef {
        TypeRef::MapOf(Box::new(key), Box::new(value))
    }

    /// The structured-text storage type containers are lowered to.
    pub fn json() -> TypeRef {
        TypeRef::Scalar(ScalarType::json())
    }

    pub fn as_scalar(&self) -> Option<&ScalarType> {
        match self {
            TypeRef::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    pub fn is_container(&self) -> bool {
        !matches!(self, TypeRef::Scalar(_))
    }

    pub fn list_element(&self) -> Option<&TypeRef> {
        match self {
            TypeRef::ListOf(inner) => Some(inner),
            _ => None,
        }
    }

    /// Name of the table-type this type refers to, if it is a non-primitive
    /// scalar.
    pub fn type_reference(&self) -> Option<&str> {
        match self {
            TypeRef::Scalar(scalar) if !scalar.is_primitive() => Some(&scalar.name),
            _ => None,
        }
    }
}

impl ScalarType {
    pub fn new(name: impl Into<String>) -> ScalarType {
        ScalarType {
            name: name.into(),
            params: vec![],
            unsigned: false,
            zerofill: false,
        }
    }

    pub fn with_params(name: impl Into<String>, params: impl IntoIterator<Item = Literal>) -> Self {
        ScalarType {
            params: params.into_iter().collect(),
            ..ScalarType::new(name)
        }
    }

    pub fn json() -> ScalarType {
        ScalarType::new("JSON")
    }

    /// True for SQL types and container element names.
    pub fn is_primitive(&self) -> bool {
        primitive::is_primitive(&self.name)
    }

    pub fn is_sql(&self) -> bool {
        primitive::is_sql_type(&self.name)
    }

    pub fn is_json(&self) -> bool {
        self.name.eq_ignore_ascii_case("JSON")
    }

    /// True for types holding character data.
    pub fn is_string(&self) -> bool {
        primitive::is_string_type(&self.name)
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Scalar(scalar) => fmt::Display::fmt(scalar, f),
            TypeRef::ListOf(inner) => write!(f, "List<{inner}>"),
            TypeRef::MapOf(key, value) => write!(f, "Map<{key}, {value}>"),
            TypeRef::Opaque => f.write_str("Object"),
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;

        if !self.params.is_empty() {
            f.write_str("(")?;
            let mut sep = "";
            for param in &self.params {
                write!(f, "{sep}{param}")?;
                sep = ", ";
            }
            f.write_str(")")?;
        }

        if self.unsigned {
            f.write_str(" UNSIGNED")?;
        }

        if self.zerofill {
            f.write_str(" ZEROFILL")?;
        }

        Ok(())
    }
}
