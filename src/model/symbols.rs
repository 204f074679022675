//! Flat symbol namespace over a sequence's locals and parameters.

use crate::model::variable::{Variable, VariableKind};

/// Result of looking a symbol up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Found { kind: VariableKind },
    Unknown,
}

/// Borrowed view of the declarations a renderer resolves symbols against.
#[derive(Debug, Clone, Copy, Default)]
pub struct SymbolTable<'a> {
    locals: &'a [Variable],
    parameters: &'a [Variable],
}

impl<'a> SymbolTable<'a> {
    pub fn new(locals: &'a [Variable], parameters: &'a [Variable]) -> Self {
        Self { locals, parameters }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Locals shadow parameters of the same name.
    pub fn resolve(&self, name: &str) -> Resolution {
        let declares = |table: &[Variable]| table.iter().any(|v| v.name == name);
        if declares(self.locals) {
            Resolution::Found {
                kind: VariableKind::Local,
            }
        } else if declares(self.parameters) {
            Resolution::Found {
                kind: VariableKind::Parameter,
            }
        } else {
            Resolution::Unknown
        }
    }

    /// Names declared both as a local and as a parameter.
    pub fn shadowed(&self) -> Vec<&'a str> {
        self.locals
            .iter()
            .filter(|l| self.parameters.iter().any(|p| p.name == l.name))
            .map(|l| l.name.as_str())
            .collect()
    }
}
