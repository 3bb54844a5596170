use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::{Class, Declaration, Enum, Function, Interface, TypeAlias, Variable};

/// Everything extracted from one source file, in source order per kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedFile {
    pub file_path: PathBuf,
    pub classes: Vec<Class>,
    pub interfaces: Vec<Interface>,
    pub enums: Vec<Enum>,
    pub functions: Vec<Function>,
    pub variables: Vec<Variable>,
    pub type_aliases: Vec<TypeAlias>,
}

impl ParsedFile {
    #[must_use]
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
            ..Self::default()
        }
    }

    /// Route a declaration into the list for its kind.
    pub fn push(&mut self, declaration: Declaration) {
        match declaration {
            Declaration::Class(c) => self.classes.push(c),
            Declaration::Interface(i) => self.interfaces.push(i),
            Declaration::Enum(e) => self.enums.push(e),
            Declaration::Function(f) => self.functions.push(f),
            Declaration::Variable(v) => self.variables.push(v),
            Declaration::TypeAlias(t) => self.type_aliases.push(t),
        }
    }

    /// Total number of top-level declarations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
            + self.interfaces.len()
            + self.enums.len()
            + self.functions.len()
            + self.variables.len()
            + self.type_aliases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flatten back into tagged declarations, grouped by kind.
    #[must_use]
    pub fn into_declarations(self) -> Vec<Declaration> {
        let mut out = Vec::with_capacity(self.len());
        out.extend(self.classes.into_iter().map(Declaration::Class));
        out.extend(self.interfaces.into_iter().map(Declaration::Interface));
        out.extend(self.enums.into_iter().map(Declaration::Enum));
        out.extend(self.functions.into_iter().map(Declaration::Function));
        out.extend(self.variables.into_iter().map(Declaration::Variable));
        out.extend(self.type_aliases.into_iter().map(Declaration::TypeAlias));
        out
    }
}
