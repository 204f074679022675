//! SeqJSON ⇄ sequence model ⇄ EDSL.
//!
//! ```text
//! SeqJSON (serde_json::Value) --parse_seq_json--> Sequence --render_edsl--> EDSL text
//!                             <--to_seq_json-----
//! ```

pub mod bulk;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod model;
pub mod render;
pub mod seqjson;
pub mod time;

pub use bulk::render_edsl_bulk;
pub use config::RenderOptions;
pub use error::{TimeFormatError, TimeNotation, ValidationError};
pub use model::{Sequence, Step, SymbolTable};
pub use render::render_step;

use serde_json::Value;

/// Validate a SeqJSON document into a [`Sequence`].
pub fn parse_seq_json(doc: &Value) -> Result<Sequence, ValidationError> {
    seqjson::parse_sequence(doc)
}

/// Serialize a [`Sequence`] back to SeqJSON.
pub fn to_seq_json(seq: &Sequence) -> Value {
    seqjson::serialize_sequence(seq)
}

/// Render with default options.
pub fn render_edsl(seq: &Sequence) -> String {
    render_edsl_with(seq, &RenderOptions::default())
}

pub fn render_edsl_with(seq: &Sequence, options: &RenderOptions) -> String {
    render::render_sequence(seq, options)
}
