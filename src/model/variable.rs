//! Typed local/parameter declarations.

use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt;

/// Which symbol table a declaration belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VariableKind {
    Local,
    Parameter,
}

impl VariableKind {
    /// Path prefix used when a symbol resolves to this table.
    pub fn namespace(self) -> &'static str {
        match self {
            VariableKind::Local => "locals",
            VariableKind::Parameter => "parameters",
        }
    }
}

/// Declared value type. The enum name lives on the `Enum` variant, so it is
/// present exactly when the type is `ENUM`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VariableType {
    Float,
    Int,
    Uint,
    String,
    Enum { enum_name: String },
}

impl VariableType {
    /// SeqJSON `type` tag, which is also the EDSL constructor name.
    pub fn tag(&self) -> &'static str {
        match self {
            VariableType::Float => "FLOAT",
            VariableType::Int => "INT",
            VariableType::Uint => "UINT",
            VariableType::String => "STRING",
            VariableType::Enum { .. } => "ENUM",
        }
    }

    pub fn enum_name(&self) -> Option<&str> {
        match self {
            VariableType::Enum { enum_name } => Some(enum_name),
            _ => None,
        }
    }
}

impl fmt::Display for VariableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllowableRange {
    pub min: Number,
    pub max: Number,
}

impl AllowableRange {
    pub fn new(min: impl Into<Number>, max: impl Into<Number>) -> Self {
        Self {
            min: min.into(),
            max: max.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AllowableValue {
    Number(Number),
    String(String),
}

/// Optional constraints accepted by every typed constructor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariableOptions {
    pub allowable_ranges: Option<Vec<AllowableRange>>,
    pub allowable_values: Option<Vec<AllowableValue>>,
    pub sc_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    /// Unset until the declaration is placed in a sequence's locals or parameters.
    pub kind: Option<VariableKind>,
    pub ty: VariableType,
    pub name: String,
    pub options: VariableOptions,
}

impl Variable {
    pub fn new(ty: VariableType, name: impl Into<String>, options: VariableOptions) -> Self {
        Self {
            kind: None,
            ty,
            name: name.into(),
            options,
        }
    }

    pub fn float(name: impl Into<String>, options: VariableOptions) -> Self {
        Self::new(VariableType::Float, name, options)
    }

    pub fn int(name: impl Into<String>, options: VariableOptions) -> Self {
        Self::new(VariableType::Int, name, options)
    }

    pub fn uint(name: impl Into<String>, options: VariableOptions) -> Self {
        Self::new(VariableType::Uint, name, options)
    }

    pub fn string(name: impl Into<String>, options: VariableOptions) -> Self {
        Self::new(VariableType::String, name, options)
    }

    pub fn enumeration(
        name: impl Into<String>,
        enum_name: impl Into<String>,
        options: VariableOptions,
    ) -> Self {
        Self::new(
            VariableType::Enum {
                enum_name: enum_name.into(),
            },
            name,
            options,
        )
    }

    pub fn with_kind(mut self, kind: VariableKind) -> Self {
        self.kind = Some(kind);
        self
    }
}
