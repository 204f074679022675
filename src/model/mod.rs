//! In-memory sequence model shared by the SeqJSON codec and the EDSL renderer.

pub mod argument;
pub mod sequence;
pub mod step;
pub mod symbols;
pub mod variable;

pub use argument::{Argument, Arguments, Literal};
pub use sequence::{GroundEpoch, Request, Sequence};
pub use step::{
    Annotated, Command, GroundBlock, GroundEvent, HardwareCommand, ImmediateCommand, Metadata,
    ModelAssignment, SequenceCall, Step, TimingTag,
};
pub use symbols::{Resolution, SymbolTable};
pub use variable::{
    AllowableRange, AllowableValue, Variable, VariableKind, VariableOptions, VariableType,
};
