use crate::diagnostics;
use crate::error::ValidationError;
use crate::model::{
    Argument, Arguments, Command, GroundBlock, GroundEpoch, GroundEvent, HardwareCommand,
    ImmediateCommand, Literal, ModelAssignment, Request, Sequence, SequenceCall, Step, TimingTag,
    Variable, VariableKind, VariableOptions, VariableType,
};
use crate::seqjson::wire::{
    ABSOLUTE, COMMAND_COMPLETE, COMMAND_RELATIVE, EPOCH_RELATIVE, REQUEST, RawGroundEpoch,
    RawHardwareCommand, RawImmediateCommand, RawModel, RawRequest, RawSequence, RawSequenceCall,
    RawStep, RawTime, RawVariable,
};
use crate::time::{parse_absolute, parse_duration};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeSet;

type Result<T> = std::result::Result<T, ValidationError>;

/// Parse a SeqJSON document held as text.
pub fn parse_sequence_str(text: &str) -> Result<Sequence> {
    let doc: Value =
        serde_json::from_str(text).map_err(|e| ValidationError::new("", e.to_string()))?;
    parse_sequence(&doc)
}

/// Parse and validate a SeqJSON document.
///
/// All-or-nothing: the first structural fault aborts the parse, and the error
/// carries the document id and the path of the offending field.
pub fn parse_sequence(doc: &Value) -> Result<Sequence> {
    let raw: RawSequence = decode(doc.clone(), "")?;
    let id = raw.id.clone();
    build_sequence(raw).map_err(|e| e.with_seq_id(&id))
}

fn build_sequence(raw: RawSequence) -> Result<Sequence> {
    let locals = raw
        .locals
        .map(|items| build_variables(items, VariableKind::Local, "locals"))
        .transpose()?;
    let parameters = raw
        .parameters
        .map(|items| build_variables(items, VariableKind::Parameter, "parameters"))
        .transpose()?;

    if let (Some(locals), Some(parameters)) = (&locals, &parameters) {
        for local in locals {
            if parameters.iter().any(|p| p.name == local.name) {
                diagnostics::warn(format!(
                    "sequence '{}': '{}' is declared as both a local and a parameter; references resolve to the local",
                    raw.id, local.name
                ));
            }
        }
    }

    let hardware_commands = raw
        .hardware_commands
        .map(|items| {
            items
                .into_iter()
                .enumerate()
                .map(|(i, v)| build_hardware(v, &format!("hardware_commands[{}]", i)))
                .collect::<Result<Vec<_>>>()
        })
        .transpose()?;

    let immediate_commands = raw
        .immediate_commands
        .map(|items| {
            items
                .into_iter()
                .enumerate()
                .map(|(i, v)| build_immediate(v, &format!("immediate_commands[{}]", i)))
                .collect::<Result<Vec<_>>>()
        })
        .transpose()?;

    let steps = raw
        .steps
        .map(|items| build_steps(items, "steps"))
        .transpose()?;

    let requests = raw
        .requests
        .map(|items| {
            items
                .into_iter()
                .enumerate()
                .map(|(i, v)| build_request(v, &format!("requests[{}]", i)))
                .collect::<Result<Vec<_>>>()
        })
        .transpose()?;

    Ok(Sequence {
        id: raw.id,
        metadata: raw.metadata,
        locals,
        parameters,
        hardware_commands,
        immediate_commands,
        steps,
        requests,
    })
}

/// Deserialize one wire item, pinning serde's message to `path`.
fn decode<T: DeserializeOwned>(value: Value, path: &str) -> Result<T> {
    serde_json::from_value(value).map_err(|e| ValidationError::new(path, e.to_string()))
}

fn build_variables(items: Vec<Value>, kind: VariableKind, field: &str) -> Result<Vec<Variable>> {
    let mut seen = BTreeSet::new();
    let mut out = Vec::with_capacity(items.len());
    for (i, item) in items.into_iter().enumerate() {
        let path = format!("{}[{}]", field, i);
        let raw: RawVariable = decode(item, &path)?;
        if !seen.insert(raw.name.clone()) {
            return Err(ValidationError::new(
                format!("{}.name", path),
                format!("duplicate {} name '{}'", field, raw.name),
            ));
        }
        out.push(build_variable(raw, &path)?.with_kind(kind));
    }
    Ok(out)
}

fn build_variable(raw: RawVariable, path: &str) -> Result<Variable> {
    let ty = match (raw.ty.as_str(), raw.enum_name) {
        ("ENUM", Some(enum_name)) => VariableType::Enum { enum_name },
        ("ENUM", None) => {
            return Err(ValidationError::new(
                format!("{}.enum_name", path),
                "ENUM variables require an enum_name",
            ));
        }
        (_, Some(_)) => {
            return Err(ValidationError::new(
                format!("{}.enum_name", path),
                format!("enum_name is only allowed on ENUM variables, not {}", raw.ty),
            ));
        }
        ("FLOAT", None) => VariableType::Float,
        ("INT", None) => VariableType::Int,
        ("UINT", None) => VariableType::Uint,
        ("STRING", None) => VariableType::String,
        (other, None) => {
            return Err(ValidationError::new(
                format!("{}.type", path),
                format!("unknown variable type '{}'", other),
            ));
        }
    };

    Ok(Variable::new(
        ty,
        raw.name,
        VariableOptions {
            allowable_ranges: raw.allowable_ranges,
            allowable_values: raw.allowable_values,
            sc_name: raw.sc_name,
        },
    ))
}

pub(crate) fn build_steps(items: Vec<Value>, field: &str) -> Result<Vec<Step>> {
    items
        .into_iter()
        .enumerate()
        .map(|(i, v)| build_step(v, &format!("{}[{}]", field, i)))
        .collect()
}

fn build_step(value: Value, path: &str) -> Result<Step> {
    let raw: RawStep = decode(value, path)?;
    let step = match raw {
        RawStep::Command(c) => Step::Command(Command {
            timing: build_time(c.time.as_ref(), path)?,
            arguments: build_arguments(&c.args, &format!("{}.args", path))?,
            stem: c.stem,
            description: c.description,
            metadata: c.metadata,
        }),
        RawStep::GroundEvent(g) => Step::GroundEvent(GroundEvent {
            timing: build_time(g.time.as_ref(), path)?,
            args: build_arguments(&g.args, &format!("{}.args", path))?,
            name: g.name,
            description: g.description,
            metadata: g.metadata,
        }),
        RawStep::GroundBlock(g) => Step::GroundBlock(GroundBlock {
            args: build_arguments(&g.args, &format!("{}.args", path))?,
            name: g.name,
            description: g.description,
            metadata: g.metadata,
        }),
        RawStep::Activate(s) => Step::Activate(build_sequence_call(s, path)?),
        RawStep::Load(s) => Step::Load(build_sequence_call(s, path)?),
    };
    Ok(step)
}

fn build_sequence_call(raw: RawSequenceCall, path: &str) -> Result<SequenceCall> {
    let models = raw
        .models
        .into_iter()
        .enumerate()
        .map(|(i, m)| build_model(m, &format!("{}.models[{}]", path, i)))
        .collect::<Result<Vec<_>>>()?;

    Ok(SequenceCall {
        timing: build_time(raw.time.as_ref(), path)?,
        args: build_arguments(&raw.args, &format!("{}.args", path))?,
        sequence: raw.sequence,
        description: raw.description,
        metadata: raw.metadata,
        engine: raw.engine,
        epoch: raw.epoch,
        models,
    })
}

fn build_model(raw: RawModel, path: &str) -> Result<ModelAssignment> {
    let offset = parse_duration(&raw.offset)
        .map_err(|e| ValidationError::time(format!("{}.offset", path), e))?;
    let value = literal(&raw.value).ok_or_else(|| {
        ValidationError::new(
            format!("{}.value", path),
            "model value must be a string, number or boolean",
        )
    })?;
    Ok(ModelAssignment {
        offset,
        value,
        variable: raw.variable,
    })
}

fn build_time(raw: Option<&RawTime>, path: &str) -> Result<TimingTag> {
    let Some(raw) = raw else {
        return Ok(TimingTag::CommandComplete);
    };
    let tag_path = format!("{}.time.tag", path);
    let tag = || {
        raw.tag.as_deref().ok_or_else(|| {
            ValidationError::new(&tag_path, format!("{} time requires a tag", raw.ty))
        })
    };

    match raw.ty.as_str() {
        ABSOLUTE => parse_absolute(tag()?)
            .map(TimingTag::Absolute)
            .map_err(|e| ValidationError::time(&tag_path, e)),
        COMMAND_RELATIVE => parse_duration(tag()?)
            .map(TimingTag::Relative)
            .map_err(|e| ValidationError::time(&tag_path, e)),
        EPOCH_RELATIVE => parse_duration(tag()?)
            .map(TimingTag::Epoch)
            .map_err(|e| ValidationError::time(&tag_path, e)),
        COMMAND_COMPLETE => Ok(TimingTag::CommandComplete),
        other => Err(ValidationError::new(
            format!("{}.time.type", path),
            format!("unknown time type '{}'", other),
        )),
    }
}

fn build_hardware(value: Value, path: &str) -> Result<HardwareCommand> {
    let raw: RawHardwareCommand = decode(value, path)?;
    Ok(HardwareCommand {
        stem: raw.stem,
        description: raw.description,
        metadata: raw.metadata,
    })
}

fn build_immediate(value: Value, path: &str) -> Result<ImmediateCommand> {
    let raw: RawImmediateCommand = decode(value, path)?;
    let args_path = format!("{}.args", path);
    let arguments = build_arguments(&raw.args, &args_path)?;
    if !arguments.is_empty() && !arguments.is_named() {
        return Err(ValidationError::new(
            args_path,
            "immediate command arguments must be named",
        ));
    }
    Ok(ImmediateCommand {
        stem: raw.stem,
        arguments,
        description: raw.description,
        metadata: raw.metadata,
    })
}

fn build_request(value: Value, path: &str) -> Result<Request> {
    let raw: RawRequest = decode(value, path)?;
    if let Some(kind) = raw.kind.as_deref().filter(|k| *k != REQUEST) {
        return Err(ValidationError::new(
            format!("{}.type", path),
            format!("expected type '{}', found '{}'", REQUEST, kind),
        ));
    }
    Ok(Request {
        steps: build_steps(raw.steps, &format!("{}.steps", path))?,
        name: raw.name,
        description: raw.description,
        ground_epoch: raw
            .ground_epoch
            .map(|RawGroundEpoch { name, delta }| GroundEpoch { name, delta }),
        metadata: raw.metadata,
    })
}

/// Decode an `args` list.
///
/// Accepted item shapes:
/// - `{ "name": ..., "type": ..., "value": ... }`  named
/// - `{ "type": ..., "value": ... }`               positional, typed
/// - `"text"`, `1.5`, `true`                        positional literal
/// - `[ ... ]`                                      positional nested group
///
/// A list must be all named or all positional.
pub(crate) fn build_arguments(items: &[Value], path: &str) -> Result<Arguments> {
    let mut positional = Vec::new();
    let mut named = Vec::new();
    let mut names = BTreeSet::new();

    for (i, item) in items.iter().enumerate() {
        let item_path = format!("{}[{}]", path, i);
        match item {
            Value::Object(obj) => {
                if let Some(key) = obj.keys().find(|k| !matches!(k.as_str(), "name" | "type" | "value")) {
                    return Err(ValidationError::new(
                        &item_path,
                        format!("unexpected key '{}'; arguments are {{name, type, value}}", key),
                    ));
                }
                let arg = build_typed_argument(obj.get("type"), obj.get("value"), &item_path)?;
                match obj.get("name") {
                    Some(Value::String(name)) => {
                        if !names.insert(name.as_str()) {
                            return Err(ValidationError::new(
                                format!("{}.name", item_path),
                                format!("duplicate argument name '{}'", name),
                            ));
                        }
                        named.push((name.clone(), arg));
                    }
                    Some(_) => {
                        return Err(ValidationError::new(
                            format!("{}.name", item_path),
                            "argument name must be a string",
                        ));
                    }
                    None => positional.push(arg),
                }
            }
            Value::Array(inner) => positional.push(Argument::Nested(build_arguments(inner, &item_path)?)),
            other => match literal(other) {
                Some(lit) => positional.push(Argument::Literal(lit)),
                None => {
                    return Err(ValidationError::new(
                        &item_path,
                        "argument must be a literal or a {name, type, value} object",
                    ));
                }
            },
        }

        if !positional.is_empty() && !named.is_empty() {
            return Err(ValidationError::new(
                &item_path,
                "cannot mix named and positional arguments",
            ));
        }
    }

    Ok(if named.is_empty() {
        Arguments::Positional(positional)
    } else {
        Arguments::Named(named)
    })
}

fn build_typed_argument(ty: Option<&Value>, value: Option<&Value>, path: &str) -> Result<Argument> {
    let ty = match ty {
        Some(Value::String(t)) => t.as_str(),
        Some(_) => return Err(ValidationError::new(format!("{}.type", path), "type must be a string")),
        None => return Err(ValidationError::new(format!("{}.type", path), "missing argument type")),
    };
    let value_path = format!("{}.value", path);
    let value = value.ok_or_else(|| ValidationError::new(&value_path, "missing argument value"))?;
    let mismatch = || {
        ValidationError::new(
            &value_path,
            format!("value {} does not match argument type '{}'", value, ty),
        )
    };

    match (ty, value) {
        ("string", Value::String(s)) => Ok(Argument::Literal(Literal::String(s.clone()))),
        ("number", Value::Number(n)) => Ok(Argument::Literal(Literal::Number(n.clone()))),
        ("boolean", Value::Bool(b)) => Ok(Argument::Literal(Literal::Boolean(*b))),
        ("symbol", Value::String(name)) => Ok(Argument::Symbol(name.clone())),
        ("repeat", Value::Array(inner)) => Ok(Argument::Nested(build_arguments(inner, &value_path)?)),
        ("string" | "number" | "boolean" | "symbol" | "repeat", _) => Err(mismatch()),
        (other, _) => Err(ValidationError::new(
            format!("{}.type", path),
            format!("unknown argument type '{}'", other),
        )),
    }
}

fn literal(value: &Value) -> Option<Literal> {
    match value {
        Value::String(s) => Some(Literal::String(s.clone())),
        Value::Number(n) => Some(Literal::Number(n.clone())),
        Value::Bool(b) => Some(Literal::Boolean(*b)),
        _ => None,
    }
}
