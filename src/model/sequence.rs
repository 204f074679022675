//! Sequence aggregate root and request groups.

use crate::model::step::{HardwareCommand, ImmediateCommand, Metadata, Step};
use crate::model::symbols::SymbolTable;
use crate::model::variable::{Variable, VariableKind};

/// Named time anchor for a request group.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GroundEpoch {
    pub name: Option<String>,
    pub delta: Option<String>,
}

/// A named bundle of steps with its own ground-epoch anchor.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Request {
    pub name: String,
    pub steps: Vec<Step>,
    pub description: Option<String>,
    pub ground_epoch: Option<GroundEpoch>,
    pub metadata: Metadata,
}

impl Request {
    pub fn new(name: impl Into<String>, steps: Vec<Step>) -> Self {
        Self {
            name: name.into(),
            steps,
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_ground_epoch(mut self, name: impl Into<String>, delta: impl Into<String>) -> Self {
        self.ground_epoch = Some(GroundEpoch {
            name: Some(name.into()),
            delta: Some(delta.into()),
        });
        self
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }
}

/// A command sequence. `None` and an empty list mean the same thing to the
/// renderer; the distinction is kept so SeqJSON round-trips field presence.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sequence {
    pub id: String,
    pub metadata: Metadata,
    pub locals: Option<Vec<Variable>>,
    pub parameters: Option<Vec<Variable>>,
    pub hardware_commands: Option<Vec<HardwareCommand>>,
    pub immediate_commands: Option<Vec<ImmediateCommand>>,
    pub steps: Option<Vec<Step>>,
    pub requests: Option<Vec<Request>>,
}

impl Sequence {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Declare locals; each is tagged [`VariableKind::Local`].
    pub fn with_locals(mut self, locals: Vec<Variable>) -> Self {
        self.locals = Some(tag(locals, VariableKind::Local));
        self
    }

    /// Declare parameters; each is tagged [`VariableKind::Parameter`].
    pub fn with_parameters(mut self, parameters: Vec<Variable>) -> Self {
        self.parameters = Some(tag(parameters, VariableKind::Parameter));
        self
    }

    pub fn with_hardware_commands(mut self, commands: Vec<HardwareCommand>) -> Self {
        self.hardware_commands = Some(commands);
        self
    }

    pub fn with_immediate_commands(mut self, commands: Vec<ImmediateCommand>) -> Self {
        self.immediate_commands = Some(commands);
        self
    }

    pub fn with_steps(mut self, steps: Vec<Step>) -> Self {
        self.steps = Some(steps);
        self
    }

    pub fn with_requests(mut self, requests: Vec<Request>) -> Self {
        self.requests = Some(requests);
        self
    }

    pub fn symbol_table(&self) -> SymbolTable<'_> {
        SymbolTable::new(
            self.locals.as_deref().unwrap_or_default(),
            self.parameters.as_deref().unwrap_or_default(),
        )
    }
}

fn tag(vars: Vec<Variable>, kind: VariableKind) -> Vec<Variable> {
    vars.into_iter().map(|v| v.with_kind(kind)).collect()
}
