//! SeqJSON wire shapes (serde-friendly).
//!
//! Document shape:
//! {
//!   "id": "banana1001.0000a",
//!   "metadata": { "author": "rrgoetz" },
//!   "locals":     [ { "name": "duration", "type": "UINT", "allowable_ranges": [...] } ],
//!   "parameters": [ ... ],
//!   "steps": [
//!     { "type": "command", "stem": "PREHEAT_OVEN",
//!       "time": { "type": "ABSOLUTE", "tag": "2020-060T03:45:19.000" },
//!       "args": [ { "name": "temperature", "type": "number", "value": 100 } ] }
//!   ],
//!   "hardware_commands":  [ { "stem": "HDW_PYRO_ENGINE", "description": "..." } ],
//!   "immediate_commands": [ { "stem": "PEEL_BANANA", "args": [...] } ],
//!   "requests": [ { "name": "power", "type": "request", "steps": [...],
//!                   "ground_epoch": { "name": "activate", "delta": "now" } } ]
//! }
//!
//! List items stay as raw `Value`s here so each one can be decoded on its own and
//! errors can name the item's index.

use crate::model::{AllowableRange, AllowableValue};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Deserialize)]
pub struct RawSequence {
    pub id: String,

    pub metadata: Map<String, Value>,

    #[serde(default)]
    pub locals: Option<Vec<Value>>,

    #[serde(default)]
    pub parameters: Option<Vec<Value>>,

    #[serde(default)]
    pub hardware_commands: Option<Vec<Value>>,

    #[serde(default)]
    pub immediate_commands: Option<Vec<Value>>,

    #[serde(default)]
    pub steps: Option<Vec<Value>>,

    #[serde(default)]
    pub requests: Option<Vec<Value>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawVariable {
    pub name: String,

    #[serde(rename = "type")]
    pub ty: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enum_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowable_ranges: Option<Vec<AllowableRange>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowable_values: Option<Vec<AllowableValue>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sc_name: Option<String>,
}

/// `{ "type": "ABSOLUTE" | "COMMAND_RELATIVE" | "EPOCH_RELATIVE" | "COMMAND_COMPLETE", "tag": ... }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTime {
    #[serde(rename = "type")]
    pub ty: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

pub const ABSOLUTE: &str = "ABSOLUTE";
pub const COMMAND_RELATIVE: &str = "COMMAND_RELATIVE";
pub const EPOCH_RELATIVE: &str = "EPOCH_RELATIVE";
pub const COMMAND_COMPLETE: &str = "COMMAND_COMPLETE";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RawStep {
    Command(RawCommand),
    GroundEvent(RawGroundEvent),
    GroundBlock(RawGroundBlock),
    Activate(RawSequenceCall),
    Load(RawSequenceCall),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawCommand {
    pub stem: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<RawTime>,

    #[serde(default)]
    pub args: Vec<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub metadata: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawGroundEvent {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<RawTime>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub metadata: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawGroundBlock {
    pub name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub metadata: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawSequenceCall {
    pub sequence: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<RawTime>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub metadata: Map<String, Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epoch: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub models: Vec<RawModel>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawModel {
    pub offset: String,
    pub value: Value,
    pub variable: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawHardwareCommand {
    pub stem: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub metadata: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawImmediateCommand {
    pub stem: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub metadata: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRequest {
    pub name: String,

    /// Always `"request"` on the wire; tolerated when absent.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default)]
    pub steps: Vec<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ground_epoch: Option<RawGroundEpoch>,

    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub metadata: Map<String, Value>,
}

pub const REQUEST: &str = "request";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawGroundEpoch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delta: Option<String>,
}
