//! Steps and the untimed command kinds.

use crate::model::argument::{Arguments, Literal};
use crate::time::{Duration, Instant};
use serde_json::{Map, Value};

/// Free-form metadata object attached to steps, requests and sequences.
pub type Metadata = Map<String, Value>;

/// Scheduling anchor of a timed step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimingTag {
    Absolute(Instant),
    Relative(Duration),
    Epoch(Duration),
    #[default]
    CommandComplete,
}

/// Methods shared by every step-like value with a description and metadata.
pub trait Annotated: Sized {
    fn annotations_mut(&mut self) -> (&mut Option<String>, &mut Metadata);

    fn with_description(mut self, description: impl Into<String>) -> Self {
        *self.annotations_mut().0 = Some(description.into());
        self
    }

    fn with_metadata(mut self, metadata: Metadata) -> Self {
        *self.annotations_mut().1 = metadata;
        self
    }
}

macro_rules! annotated {
    ($($ty:ty),*) => {
        $(
            impl Annotated for $ty {
                fn annotations_mut(&mut self) -> (&mut Option<String>, &mut Metadata) {
                    (&mut self.description, &mut self.metadata)
                }
            }
        )*
    };
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Command {
    pub stem: String,
    pub arguments: Arguments,
    pub timing: TimingTag,
    pub description: Option<String>,
    pub metadata: Metadata,
}

impl Command {
    pub fn new(stem: impl Into<String>) -> Self {
        Self {
            stem: stem.into(),
            ..Default::default()
        }
    }

    pub fn with_arguments(mut self, arguments: Arguments) -> Self {
        self.arguments = arguments;
        self
    }

    pub fn with_timing(mut self, timing: TimingTag) -> Self {
        self.timing = timing;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GroundEvent {
    pub name: String,
    pub args: Arguments,
    pub timing: TimingTag,
    pub description: Option<String>,
    pub metadata: Metadata,
}

impl GroundEvent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_args(mut self, args: Arguments) -> Self {
        self.args = args;
        self
    }

    pub fn with_timing(mut self, timing: TimingTag) -> Self {
        self.timing = timing;
        self
    }
}

/// Ground block: like a ground event, but never timed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GroundBlock {
    pub name: String,
    pub args: Arguments,
    pub description: Option<String>,
    pub metadata: Metadata,
}

impl GroundBlock {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_args(mut self, args: Arguments) -> Self {
        self.args = args;
        self
    }
}

/// An initial-condition assignment for a model variable of an activated sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelAssignment {
    pub offset: Duration,
    pub value: Literal,
    pub variable: String,
}

/// Body of both `activate` and `load` steps.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SequenceCall {
    pub sequence: String,
    pub args: Arguments,
    pub timing: TimingTag,
    pub description: Option<String>,
    pub metadata: Metadata,
    pub engine: Option<i64>,
    pub epoch: Option<String>,
    pub models: Vec<ModelAssignment>,
}

impl SequenceCall {
    pub fn new(sequence: impl Into<String>) -> Self {
        Self {
            sequence: sequence.into(),
            ..Default::default()
        }
    }

    pub fn with_args(mut self, args: Arguments) -> Self {
        self.args = args;
        self
    }

    pub fn with_timing(mut self, timing: TimingTag) -> Self {
        self.timing = timing;
        self
    }

    pub fn with_engine(mut self, engine: i64) -> Self {
        self.engine = Some(engine);
        self
    }

    pub fn with_epoch(mut self, epoch: impl Into<String>) -> Self {
        self.epoch = Some(epoch.into());
        self
    }

    pub fn with_models(mut self, models: Vec<ModelAssignment>) -> Self {
        self.models = models;
        self
    }
}

/// A step in a sequence or request `steps` list.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Command(Command),
    GroundEvent(GroundEvent),
    GroundBlock(GroundBlock),
    Activate(SequenceCall),
    Load(SequenceCall),
}

impl From<Command> for Step {
    fn from(c: Command) -> Self {
        Step::Command(c)
    }
}

impl From<GroundEvent> for Step {
    fn from(g: GroundEvent) -> Self {
        Step::GroundEvent(g)
    }
}

impl From<GroundBlock> for Step {
    fn from(g: GroundBlock) -> Self {
        Step::GroundBlock(g)
    }
}

/// A hardware command: stem only, never timed, never takes arguments.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HardwareCommand {
    pub stem: String,
    pub description: Option<String>,
    pub metadata: Metadata,
}

impl HardwareCommand {
    pub fn new(stem: impl Into<String>) -> Self {
        Self {
            stem: stem.into(),
            ..Default::default()
        }
    }
}

/// An immediate command: executed on receipt, so it carries no timing tag.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImmediateCommand {
    pub stem: String,
    pub arguments: Arguments,
    pub description: Option<String>,
    pub metadata: Metadata,
}

impl ImmediateCommand {
    pub fn new(stem: impl Into<String>) -> Self {
        Self {
            stem: stem.into(),
            ..Default::default()
        }
    }

    pub fn with_arguments(mut self, arguments: Arguments) -> Self {
        self.arguments = arguments;
        self
    }
}

annotated!(
    Command,
    GroundEvent,
    GroundBlock,
    SequenceCall,
    HardwareCommand,
    ImmediateCommand
);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn commands_default_to_command_complete() {
        let c = Command::new("BAKE_BREAD");
        assert_eq!(c.timing, TimingTag::CommandComplete);
        assert!(c.arguments.is_empty());
    }

    #[test]
    fn annotations_are_order_independent() {
        let mut meta = Metadata::new();
        meta.insert("author".into(), json!("Emery"));

        let a = Command::new("X")
            .with_metadata(meta.clone())
            .with_description("d");
        let b = Command::new("X").with_description("d").with_metadata(meta);
        assert_eq!(a, b);
    }

    #[test]
    fn step_conversions() {
        assert!(matches!(Step::from(GroundBlock::new("b")), Step::GroundBlock(g) if g.name == "b"));
        assert!(matches!(Step::from(GroundEvent::new("e")), Step::GroundEvent(_)));
    }
}
