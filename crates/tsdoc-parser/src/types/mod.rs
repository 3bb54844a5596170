//! Declaration data model produced by the extractor.

mod declarations;
mod doc_comment;
mod members;
mod named;
mod parsed_file;

pub use declarations::{
    Class, Declaration, Enum, EnumMember, Interface, TypeAlias, Variable, VariableKind,
};
pub use doc_comment::DocComment;
pub use members::{Accessibility, Function, Method, Parameter, Property};
pub use named::{Named, dedup_by_name, sort_by_name};
pub use parsed_file::ParsedFile;
