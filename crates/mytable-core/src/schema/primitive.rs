//! Names that denote primitive types rather than table-type references.

use super::{Literal, ScalarType};

/// MySQL column types, matched case-insensitively.
const SQL_TYPES: &[&str] = &[
    "BIT",
    "TINYINT",
    "SMALLINT",
    "MEDIUMINT",
    "INT",
    "INTEGER",
    "BIGINT",
    "SERIAL",
    "DECIMAL",
    "DEC",
    "NUMERIC",
    "FIXED",
    "FLOAT",
    "DOUBLE",
    "REAL",
    "BOOL",
    "BOOLEAN",
    "DATE",
    "DATETIME",
    "TIMESTAMP",
    "TIME",
    "YEAR",
    "CHAR",
    "NCHAR",
    "VARCHAR",
    "NVARCHAR",
    "BINARY",
    "VARBINARY",
    "TINYBLOB",
    "BLOB",
    "MEDIUMBLOB",
    "LONGBLOB",
    "TINYTEXT",
    "TEXT",
    "MEDIUMTEXT",
    "LONGTEXT",
    "ENUM",
    "SET",
    "JSON",
    "GEOMETRY",
    "POINT",
    "LINESTRING",
    "POLYGON",
    "MULTIPOINT",
    "MULTILINESTRING",
    "MULTIPOLYGON",
    "GEOMETRYCOLLECTION",
];

const STRING_TYPES: &[&str] = &[
    "CHAR",
    "NCHAR",
    "VARCHAR",
    "NVARCHAR",
    "TINYTEXT",
    "TEXT",
    "MEDIUMTEXT",
    "LONGTEXT",
];

/// Element names used inside containers, matched exactly, with the SQL type
/// a bare column of that type is stored as.
const ELEMENT_TYPES: &[(&str, &str, &[u32])] = &[
    ("String", "VARCHAR", &[255]),
    ("Integer", "INT", &[]),
    ("Long", "BIGINT", &[]),
    ("Short", "SMALLINT", &[]),
    ("Byte", "TINYINT", &[]),
    ("Boolean", "BOOLEAN", &[]),
    ("Double", "DOUBLE", &[]),
    ("Float", "FLOAT", &[]),
    ("BigDecimal", "DECIMAL", &[19, 4]),
    ("Date", "DATETIME", &[]),
    ("LocalDateTime", "DATETIME", &[]),
    ("Instant", "DATETIME", &[]),
    ("LocalDate", "DATE", &[]),
];

pub fn is_sql_type(name: &str) -> bool {
    SQL_TYPES.iter().any(|ty| ty.eq_ignore_ascii_case(name))
}

pub fn is_element_type(name: &str) -> bool {
    ELEMENT_TYPES.iter().any(|(element, ..)| *element == name)
}

pub fn is_primitive(name: &str) -> bool {
    is_element_type(name) || is_sql_type(name)
}

pub fn is_string_type(name: &str) -> bool {
    name == "String" || STRING_TYPES.iter().any(|ty| ty.eq_ignore_ascii_case(name))
}

/// The SQL storage type of a container element name, e.g. `String` is
/// stored as `VARCHAR(255)`.
pub fn element_storage(name: &str) -> Option<ScalarType> {
    ELEMENT_TYPES
        .iter()
        .find(|(element, ..)| *element == name)
        .map(|(_, sql, params)| {
            ScalarType::with_params(*sql, params.iter().map(|param| Literal::number(param)))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sql_types_ignore_case() {
        assert!(is_sql_type("varchar"));
        assert!(is_sql_type("Json"));
        assert!(!is_sql_type("Item"));
    }

    #[test]
    fn element_names_are_exact() {
        assert!(is_primitive("String"));
        assert!(!is_primitive("string_list"));
        assert_eq!(element_storage("BigDecimal").unwrap().to_string(), "DECIMAL(19, 4)");
        assert_eq!(element_storage("Date").unwrap().to_string(), "DATETIME");
        assert!(element_storage("DATE").is_none());
    }

    #[test]
    fn string_types() {
        assert!(is_string_type("String"));
        assert!(is_string_type("varchar"));
        assert!(!is_string_type("INT"));
    }
}
