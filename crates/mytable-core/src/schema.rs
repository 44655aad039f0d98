mod builder;
pub(crate) use builder::Builder;

mod column;
pub use column::{Assoc, ColumnDef, Modifiers};

mod constraint;
pub use constraint::{ForeignKey, KeyPart, ReferentialAction, SortOrder, TableConstraint};

mod literal;
pub use literal::Literal;

mod options;
pub use options::TableOptions;

pub mod primitive;

mod table;
pub use table::{Provenance, Span, TableStatement};

mod ty;
pub use ty::{ScalarType, TypeRef};
