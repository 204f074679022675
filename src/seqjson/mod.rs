//! SeqJSON codec: wire shapes, validation into the model, and the inverse.
//!
//! Parsing goes raw JSON -> serde wire structs -> validated model, the same
//! two-step shape used for every input this crate reads.

pub mod parse;
pub mod serialize;
pub mod wire;

pub use parse::{parse_sequence, parse_sequence_str};
pub use serialize::{serialize_sequence, serialize_step};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::*;
    use crate::time::{parse_absolute, parse_duration};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn meta(author: &str) -> Metadata {
        let mut m = Metadata::new();
        m.insert("author".into(), json!(author));
        m
    }

    fn full_sequence() -> Sequence {
        Sequence::new("banana1001.0000a")
            .with_metadata(meta("rrgoetz"))
            .with_locals(vec![Variable::uint(
                "duration",
                VariableOptions {
                    allowable_ranges: Some(vec![AllowableRange::new(1, 3600)]),
                    sc_name: Some("BAN-NATION".into()),
                    ..Default::default()
                },
            )])
            .with_parameters(vec![Variable::enumeration(
                "mode",
                "MODES",
                VariableOptions {
                    allowable_values: Some(vec![
                        AllowableValue::String("ON".into()),
                        AllowableValue::Number(3.into()),
                    ]),
                    ..Default::default()
                },
            )])
            .with_hardware_commands(vec![
                HardwareCommand::new("HDW_PYRO_ENGINE")
                    .with_description("FIRE THE PYROS")
                    .with_metadata(meta("rrgoetz")),
            ])
            .with_immediate_commands(vec![
                ImmediateCommand::new("PEEL_BANANA")
                    .with_arguments(Arguments::named([("direction", Argument::from("FromStem"))])),
            ])
            .with_steps(vec![
                Command::new("PREHEAT_OVEN")
                    .with_timing(TimingTag::Absolute(parse_absolute("2020-060T03:45:19.000").unwrap()))
                    .with_arguments(Arguments::named([
                        ("temperature", Argument::from(100u64)),
                        ("target", Argument::symbol("duration")),
                    ]))
                    .into(),
                Command::new("TEST")
                    .with_timing(TimingTag::Epoch(parse_duration("00:10:00.000").unwrap()))
                    .with_arguments(Arguments::positional([
                        Argument::from("string"),
                        Argument::from(false),
                        Argument::Nested(Arguments::positional([1u64, 2])),
                    ]))
                    .into(),
                GroundEvent::new("Ground Event Name")
                    .with_timing(TimingTag::Relative(parse_duration("00:00:05.000").unwrap()))
                    .with_args(Arguments::named([("name", Argument::from("hello"))]))
                    .with_description("ground event description")
                    .into(),
                GroundBlock::new("Ground Block Name")
                    .with_args(Arguments::named([("turnOff", Argument::from(false))]))
                    .into(),
                Step::Activate(
                    SequenceCall::new("test0001")
                        .with_engine(45)
                        .with_epoch("epoch1")
                        .with_models(vec![ModelAssignment {
                            offset: parse_duration("00:00:00.000").unwrap(),
                            value: Literal::from("1.234"),
                            variable: "model_var_float".into(),
                        }]),
                ),
                Step::Load(SequenceCall::new("test0002").with_metadata(meta("Ryan"))),
            ])
            .with_requests(vec![
                Request::new("power", vec![Command::new("ADD_WATER").into()])
                    .with_description(" Activate the oven")
                    .with_ground_epoch("activate", "now")
                    .with_metadata(meta("rrgoetz")),
            ])
    }

    #[test]
    fn sequences_round_trip_through_seqjson() {
        let seq = full_sequence();
        let doc = serialize_sequence(&seq);
        assert_eq!(parse_sequence(&doc).unwrap(), seq);
    }

    #[test]
    fn documents_round_trip_structurally() {
        let doc = json!({
            "id": "test00000",
            "metadata": {},
            "steps": [
                { "type": "command", "stem": "test", "time": { "type": "COMMAND_COMPLETE" }, "args": [] },
                {
                    "type": "command",
                    "stem": "test2",
                    "metadata": { "author": "Mission Operation Engineer" },
                    "args": [{ "name": "parameter1", "type": "string", "value": "test_string" }],
                    "time": { "type": "ABSOLUTE", "tag": "2020-001T00:00:00.000" }
                }
            ]
        });
        assert_eq!(serialize_sequence(&parse_sequence(&doc).unwrap()), doc);
    }

    #[test]
    fn absent_lists_stay_absent() {
        let doc = serialize_sequence(&Sequence::new("bare"));
        assert_eq!(doc, json!({ "id": "bare", "metadata": {} }));
    }
}
