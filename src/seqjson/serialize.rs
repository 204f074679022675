use crate::model::{
    Argument, Arguments, HardwareCommand, ImmediateCommand, Literal, ModelAssignment, Request,
    Sequence, SequenceCall, Step, TimingTag, Variable,
};
use crate::seqjson::wire::{
    ABSOLUTE, COMMAND_COMPLETE, COMMAND_RELATIVE, EPOCH_RELATIVE, REQUEST, RawCommand,
    RawGroundBlock, RawGroundEpoch, RawGroundEvent, RawHardwareCommand, RawImmediateCommand,
    RawModel, RawRequest, RawSequenceCall, RawStep, RawTime, RawVariable,
};
use crate::time::{format_absolute, format_duration};
use serde::Serialize;
use serde_json::{Map, Value, json};

/// Serialize a sequence to its SeqJSON document.
///
/// Absent optional fields are omitted rather than written as `null`.
pub fn serialize_sequence(seq: &Sequence) -> Value {
    let mut doc = Map::new();
    doc.insert("id".into(), Value::String(seq.id.clone()));
    doc.insert("metadata".into(), Value::Object(seq.metadata.clone()));

    if let Some(locals) = &seq.locals {
        doc.insert("locals".into(), list(locals, raw_variable));
    }
    if let Some(parameters) = &seq.parameters {
        doc.insert("parameters".into(), list(parameters, raw_variable));
    }
    if let Some(commands) = &seq.hardware_commands {
        doc.insert("hardware_commands".into(), list(commands, raw_hardware));
    }
    if let Some(commands) = &seq.immediate_commands {
        doc.insert("immediate_commands".into(), list(commands, raw_immediate));
    }
    if let Some(steps) = &seq.steps {
        doc.insert("steps".into(), list(steps, raw_step));
    }
    if let Some(requests) = &seq.requests {
        doc.insert("requests".into(), list(requests, raw_request));
    }

    Value::Object(doc)
}

/// Serialize a single step.
pub fn serialize_step(step: &Step) -> Value {
    to_value(raw_step(step))
}

fn list<T, R: Serialize>(items: &[T], f: impl Fn(&T) -> R) -> Value {
    Value::Array(items.iter().map(|item| to_value(f(item))).collect())
}

// The wire structs only hold strings, numbers, maps and `Value`s, none of which
// can fail to serialize.
fn to_value<R: Serialize>(raw: R) -> Value {
    serde_json::to_value(raw).unwrap_or(Value::Null)
}

fn raw_variable(v: &Variable) -> RawVariable {
    RawVariable {
        name: v.name.clone(),
        ty: v.ty.tag().to_string(),
        enum_name: v.ty.enum_name().map(str::to_string),
        allowable_ranges: v.options.allowable_ranges.clone(),
        allowable_values: v.options.allowable_values.clone(),
        sc_name: v.options.sc_name.clone(),
    }
}

fn raw_time(timing: &TimingTag) -> RawTime {
    let (ty, tag) = match timing {
        TimingTag::Absolute(t) => (ABSOLUTE, Some(format_absolute(*t))),
        TimingTag::Relative(d) => (COMMAND_RELATIVE, Some(format_duration(*d))),
        TimingTag::Epoch(d) => (EPOCH_RELATIVE, Some(format_duration(*d))),
        TimingTag::CommandComplete => (COMMAND_COMPLETE, None),
    };
    RawTime {
        ty: ty.to_string(),
        tag,
    }
}

fn raw_step(step: &Step) -> RawStep {
    match step {
        Step::Command(c) => RawStep::Command(RawCommand {
            stem: c.stem.clone(),
            time: Some(raw_time(&c.timing)),
            args: arguments(&c.arguments),
            description: c.description.clone(),
            metadata: c.metadata.clone(),
        }),
        Step::GroundEvent(g) => RawStep::GroundEvent(RawGroundEvent {
            name: g.name.clone(),
            time: Some(raw_time(&g.timing)),
            args: arguments(&g.args),
            description: g.description.clone(),
            metadata: g.metadata.clone(),
        }),
        Step::GroundBlock(g) => RawStep::GroundBlock(RawGroundBlock {
            name: g.name.clone(),
            args: arguments(&g.args),
            description: g.description.clone(),
            metadata: g.metadata.clone(),
        }),
        Step::Activate(s) => RawStep::Activate(raw_sequence_call(s)),
        Step::Load(s) => RawStep::Load(raw_sequence_call(s)),
    }
}

fn raw_sequence_call(s: &SequenceCall) -> RawSequenceCall {
    RawSequenceCall {
        sequence: s.sequence.clone(),
        time: Some(raw_time(&s.timing)),
        args: arguments(&s.args),
        description: s.description.clone(),
        metadata: s.metadata.clone(),
        engine: s.engine,
        epoch: s.epoch.clone(),
        models: s.models.iter().map(raw_model).collect(),
    }
}

fn raw_model(m: &ModelAssignment) -> RawModel {
    RawModel {
        offset: format_duration(m.offset),
        value: literal(&m.value),
        variable: m.variable.clone(),
    }
}

fn raw_hardware(c: &HardwareCommand) -> RawHardwareCommand {
    RawHardwareCommand {
        stem: c.stem.clone(),
        description: c.description.clone(),
        metadata: c.metadata.clone(),
    }
}

fn raw_immediate(c: &ImmediateCommand) -> RawImmediateCommand {
    RawImmediateCommand {
        stem: c.stem.clone(),
        args: arguments(&c.arguments),
        description: c.description.clone(),
        metadata: c.metadata.clone(),
    }
}

fn raw_request(r: &Request) -> RawRequest {
    RawRequest {
        name: r.name.clone(),
        kind: Some(REQUEST.to_string()),
        steps: r.steps.iter().map(serialize_step).collect(),
        description: r.description.clone(),
        ground_epoch: r.ground_epoch.as_ref().map(|g| RawGroundEpoch {
            name: g.name.clone(),
            delta: g.delta.clone(),
        }),
        metadata: r.metadata.clone(),
    }
}

/// Positional items become `{type, value}`, named items `{name, type, value}`.
pub(crate) fn arguments(args: &Arguments) -> Vec<Value> {
    match args {
        Arguments::Positional(items) => items
            .iter()
            .map(|arg| json!({ "type": arg.type_name(), "value": argument_value(arg) }))
            .collect(),
        Arguments::Named(items) => items
            .iter()
            .map(|(name, arg)| {
                json!({ "name": name, "type": arg.type_name(), "value": argument_value(arg) })
            })
            .collect(),
    }
}

fn argument_value(arg: &Argument) -> Value {
    match arg {
        Argument::Literal(lit) => literal(lit),
        Argument::Symbol(name) => Value::String(name.clone()),
        Argument::Nested(inner) => Value::Array(arguments(inner)),
    }
}

fn literal(lit: &Literal) -> Value {
    match lit {
        Literal::String(s) => Value::String(s.clone()),
        Literal::Number(n) => Value::Number(n.clone()),
        Literal::Boolean(b) => Value::Bool(*b),
    }
}
