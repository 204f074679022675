//! Sequence/step pretty-printer.
//!
//! `level` is the nesting depth of the line a construct starts on. The first
//! line of every rendered construct is left unindented; continuation lines are
//! indented absolutely from `level`.

use crate::config::RenderOptions;
use crate::diagnostics;
use crate::model::{
    Argument, Arguments, GroundBlock, GroundEvent, HardwareCommand, ImmediateCommand, Literal,
    Metadata, ModelAssignment, Request, Resolution, Sequence, SequenceCall, Step, SymbolTable,
    TimingTag, Variable,
};
use crate::render::literal::{Fragment, array, json, number, object, pad, quote, separated};
use crate::time::{format_absolute, format_duration};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

const STEPS_FUNCTION: &str = "({ locals, parameters }) => ([";

/// Chained `.NAME(value)` calls, keyed (and therefore emitted) by name.
type Attributes = BTreeMap<&'static str, String>;

pub struct EdslRenderer<'a> {
    symbols: SymbolTable<'a>,
    options: &'a RenderOptions,
}

impl<'a> EdslRenderer<'a> {
    pub fn new(symbols: SymbolTable<'a>, options: &'a RenderOptions) -> Self {
        Self { symbols, options }
    }

    pub fn sequence(&self, seq: &Sequence) -> String {
        tracing::debug!(
            seq_id = %seq.id,
            steps = seq.steps.as_ref().map_or(0, Vec::len),
            requests = seq.requests.as_ref().map_or(0, Vec::len),
            "rendering sequence"
        );
        for name in self.symbols.shadowed() {
            tracing::debug!(seq_id = %seq.id, name, "local shadows parameter");
        }

        let mut out = String::from("export default () =>\n  Sequence.new({\n");
        out.push_str(&format!("{}seqId: {},\n", pad(2), quote(&seq.id)));
        out.push_str(&format!("{}metadata: {},\n", pad(2), json(&Value::Object(seq.metadata.clone()), 2)));

        if let Some(locals) = non_empty(&seq.locals) {
            out.push_str(&self.declarations("locals", locals));
        }
        if let Some(parameters) = non_empty(&seq.parameters) {
            out.push_str(&self.declarations("parameters", parameters));
        }
        if let Some(commands) = non_empty(&seq.hardware_commands) {
            let items: Vec<String> = commands.iter().map(|c| self.hardware_command(c, 3)).collect();
            out.push_str(&format!("{}hardware_commands: {},\n", pad(2), separated(&items, 2)));
        }
        if let Some(commands) = non_empty(&seq.immediate_commands) {
            out.push_str(&format!("{}immediate_commands: [\n", pad(2)));
            for command in commands {
                out.push_str(&format!("{}{},\n", pad(3), self.immediate_command(command, 3)));
            }
            out.push_str(&format!("{}],\n", pad(2)));
        }
        if let Some(steps) = non_empty(&seq.steps) {
            out.push_str(&format!("{}steps: {}\n", pad(2), STEPS_FUNCTION));
            for step in steps {
                out.push_str(&format!("{}{},\n", pad(3), self.step(step, 3)));
            }
            out.push_str(&format!("{}]),\n", pad(2)));
        }
        if let Some(requests) = non_empty(&seq.requests) {
            let body = requests
                .iter()
                .map(|r| format!("{}{}", pad(3), self.request(r, 3)))
                .collect::<Vec<_>>()
                .join(",\n");
            out.push_str(&format!("{}requests: {}\n{}\n{}]),\n", pad(2), STEPS_FUNCTION, body, pad(2)));
        }

        out.push_str("  });");
        out
    }

    fn declarations(&self, field: &str, vars: &[Variable]) -> String {
        let items: Vec<String> = vars.iter().map(|v| self.variable(v, 3)).collect();
        format!("{}{}: {},\n", pad(2), field, separated(&items, 2))
    }

    /// `TYPE('name'[, 'ENUM_NAME'][, { options }])`
    pub fn variable(&self, var: &Variable, level: usize) -> String {
        let mut call = format!("{}({}", var.ty.tag(), quote(&var.name));
        if let Some(enum_name) = var.ty.enum_name() {
            call.push_str(&format!(", {}", quote(enum_name)));
        }

        let opts = &var.options;
        let mut entries = Vec::new();
        if let Some(ranges) = &opts.allowable_ranges {
            let ranges: Vec<Value> = ranges
                .iter()
                .map(|r| serde_json::json!({ "min": r.min, "max": r.max }))
                .collect();
            entries.push(("allowable_ranges".to_string(), Fragment::plain(json(&Value::Array(ranges), level + 1))));
        }
        if let Some(values) = &opts.allowable_values {
            let values = serde_json::to_value(values).unwrap_or(Value::Null);
            entries.push(("allowable_values".to_string(), Fragment::plain(json(&values, level + 1))));
        }
        if let Some(sc_name) = &opts.sc_name {
            entries.push(("sc_name".to_string(), Fragment::plain(quote(sc_name))));
        }
        if !entries.is_empty() {
            call.push_str(&format!(", {}", object(&entries, level, self.options)));
        }

        call.push(')');
        call
    }

    pub fn step(&self, step: &Step, level: usize) -> String {
        match step {
            Step::Command(c) => {
                let head = format!(
                    "{}.{}{}",
                    timing(&c.timing),
                    c.stem,
                    self.call_arguments(&c.arguments, level)
                );
                chain(head, annotations(&c.description, &c.metadata, level + 1), level + 1)
            }
            Step::GroundEvent(g) => self.ground_event(g, level),
            Step::GroundBlock(g) => self.ground_block(g, level),
            Step::Activate(s) => self.sequence_call("ACTIVATE", s, level),
            Step::Load(s) => self.sequence_call("LOAD", s, level),
        }
    }

    fn ground_event(&self, g: &GroundEvent, level: usize) -> String {
        let head = format!("{}.GROUND_EVENT({})", timing(&g.timing), quote(&g.name));
        let mut attrs = annotations(&g.description, &g.metadata, level + 1);
        self.insert_arguments(&mut attrs, &g.args, level + 1);
        chain(head, attrs, level + 1)
    }

    fn ground_block(&self, g: &GroundBlock, level: usize) -> String {
        let head = format!("C.GROUND_BLOCK({})", quote(&g.name));
        let mut attrs = annotations(&g.description, &g.metadata, level + 1);
        self.insert_arguments(&mut attrs, &g.args, level + 1);
        chain(head, attrs, level + 1)
    }

    fn sequence_call(&self, verb: &str, s: &SequenceCall, level: usize) -> String {
        let head = format!("{}.{}({})", timing(&s.timing), verb, quote(&s.sequence));
        let mut attrs = annotations(&s.description, &s.metadata, level + 1);
        self.insert_arguments(&mut attrs, &s.args, level + 1);
        if let Some(engine) = s.engine {
            attrs.insert("ENGINE", engine.to_string());
        }
        if let Some(epoch) = &s.epoch {
            attrs.insert("EPOCH", quote(epoch));
        }
        if !s.models.is_empty() {
            attrs.insert("MODELS", self.models(&s.models, level + 1));
        }
        chain(head, attrs, level + 1)
    }

    fn models(&self, models: &[ModelAssignment], level: usize) -> String {
        let items: Vec<String> = models
            .iter()
            .map(|m| {
                let entries = vec![
                    ("offset".to_string(), Fragment::plain(quote(&format_duration(m.offset)))),
                    ("value".to_string(), Fragment::plain(literal(&m.value))),
                    ("variable".to_string(), Fragment::plain(quote(&m.variable))),
                ];
                object(&entries, level + 1, self.options)
            })
            .collect();
        separated(&items, level)
    }

    /// Hardware commands chain their attributes at the stem's own column.
    pub fn hardware_command(&self, c: &HardwareCommand, level: usize) -> String {
        chain(c.stem.clone(), annotations(&c.description, &c.metadata, level), level)
    }

    pub fn immediate_command(&self, c: &ImmediateCommand, level: usize) -> String {
        let head = format!("{}{}", c.stem, self.call_arguments(&c.arguments, level));
        chain(head, annotations(&c.description, &c.metadata, level + 1), level + 1)
    }

    pub fn request(&self, r: &Request, level: usize) -> String {
        let inner = pad(level + 1);
        let mut out = String::from("{\n");
        out.push_str(&format!("{}name: {},\n", inner, quote(&r.name)));
        if r.steps.is_empty() {
            out.push_str(&format!("{}steps: [],\n", inner));
        } else {
            out.push_str(&format!("{}steps: [\n", inner));
            for step in &r.steps {
                out.push_str(&format!("{}{},\n", pad(level + 2), self.step(step, level + 2)));
            }
            out.push_str(&format!("{}],\n", inner));
        }
        out.push_str(&format!("{}type: 'request',\n", inner));
        if let Some(description) = r.description.as_deref().filter(|d| !d.is_empty()) {
            out.push_str(&format!("{}description: {},\n", inner, quote(description)));
        }
        if let Some(epoch) = &r.ground_epoch {
            let mut map = Map::new();
            if let Some(delta) = &epoch.delta {
                map.insert("delta".into(), Value::String(delta.clone()));
            }
            if let Some(name) = &epoch.name {
                map.insert("name".into(), Value::String(name.clone()));
            }
            out.push_str(&format!("{}ground_epoch: {},\n", inner, json(&Value::Object(map), level + 1)));
        }
        if !r.metadata.is_empty() {
            out.push_str(&format!(
                "{}metadata: {},\n",
                inner,
                json(&Value::Object(r.metadata.clone()), level + 1)
            ));
        }
        out.push_str(&pad(level));
        out.push('}');
        out
    }

    /// `({ ... })` / `([ ... ])`, or nothing when there are no arguments.
    fn call_arguments(&self, args: &Arguments, level: usize) -> String {
        if args.is_empty() {
            return String::new();
        }
        format!("({})", self.arguments(args, level))
    }

    fn arguments(&self, args: &Arguments, level: usize) -> String {
        match args {
            Arguments::Positional(items) => {
                let items: Vec<Fragment> = items.iter().map(|a| self.argument(a, level + 1)).collect();
                array(&items, level, self.options)
            }
            Arguments::Named(items) => {
                let entries: Vec<(String, Fragment)> = items
                    .iter()
                    .map(|(name, a)| (name.clone(), self.argument(a, level + 1)))
                    .collect();
                object(&entries, level, self.options)
            }
        }
    }

    fn argument(&self, arg: &Argument, level: usize) -> Fragment {
        match arg {
            Argument::Literal(lit) => Fragment::plain(literal(lit)),
            Argument::Symbol(name) => self.symbol(name),
            Argument::Nested(args) => Fragment::plain(self.arguments(args, level)),
        }
    }

    fn symbol(&self, name: &str) -> Fragment {
        match self.symbols.resolve(name) {
            Resolution::Found { kind } => Fragment::plain(format!("{}.{}", kind.namespace(), name)),
            Resolution::Unknown => {
                let message = format!("Variable '{}' is not defined as a local or parameter", name);
                diagnostics::warn(&message);
                Fragment::degraded(format!("unknown.{}", name), format!("ERROR: {}", message))
            }
        }
    }

    /// `.ARGUMENTS([...])` form used by ground events, ground blocks and sequence calls.
    fn insert_arguments(&self, attrs: &mut Attributes, args: &Arguments, level: usize) {
        if args.is_empty() {
            return;
        }
        let items: Vec<Fragment> = match args {
            Arguments::Positional(items) => items
                .iter()
                .map(|a| Fragment::plain(self.typed_argument(None, a, level + 1)))
                .collect(),
            Arguments::Named(items) => items
                .iter()
                .map(|(name, a)| Fragment::plain(self.typed_argument(Some(name.as_str()), a, level + 1)))
                .collect(),
        };
        attrs.insert("ARGUMENTS", array(&items, level, self.options));
    }

    fn typed_argument(&self, name: Option<&str>, arg: &Argument, level: usize) -> String {
        let mut entries = Vec::new();
        if let Some(name) = name {
            entries.push(("name".to_string(), Fragment::plain(quote(name))));
        }
        entries.push(("type".to_string(), Fragment::plain(quote(arg.type_name()))));
        entries.push(("value".to_string(), self.argument(arg, level + 1)));
        object(&entries, level, self.options)
    }
}

fn non_empty<T>(list: &Option<Vec<T>>) -> Option<&[T]> {
    list.as_deref().filter(|items| !items.is_empty())
}

fn timing(tag: &TimingTag) -> String {
    match tag {
        TimingTag::Absolute(t) => format!("A`{}`", format_absolute(*t)),
        TimingTag::Relative(d) => format!("R`{}`", format_duration(*d)),
        TimingTag::Epoch(d) => format!("E`{}`", format_duration(*d)),
        TimingTag::CommandComplete => "C".to_string(),
    }
}

fn literal(lit: &Literal) -> String {
    match lit {
        Literal::String(s) => quote(s),
        Literal::Number(n) => number(n),
        Literal::Boolean(b) => b.to_string(),
    }
}

fn annotations(description: &Option<String>, metadata: &Metadata, level: usize) -> Attributes {
    let mut attrs = Attributes::new();
    if let Some(description) = description.as_deref().filter(|d| !d.is_empty()) {
        attrs.insert("DESCRIPTION", quote(description));
    }
    if !metadata.is_empty() {
        attrs.insert("METADATA", json(&Value::Object(metadata.clone()), level));
    }
    attrs
}

fn chain(head: String, attrs: Attributes, level: usize) -> String {
    let mut out = head;
    for (name, value) in attrs {
        out.push_str(&format!("\n{}.{}({})", pad(level), name, value));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AllowableRange, AllowableValue, Annotated, Command, VariableOptions};
    use crate::time::{Duration, Instant};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn render(step: &Step) -> String {
        let options = RenderOptions::default();
        EdslRenderer::new(SymbolTable::empty(), &options).step(step, 0)
    }

    fn meta(author: &str) -> Metadata {
        let mut m = Metadata::new();
        m.insert("author".into(), json!(author));
        m
    }

    fn doy(text: &str) -> TimingTag {
        TimingTag::Absolute(text.parse::<Instant>().unwrap())
    }

    fn hms(text: &str) -> Duration {
        text.parse::<Duration>().unwrap()
    }

    #[test]
    fn bare_command_complete_command() {
        assert_eq!(render(&Command::new("BAKE_BREAD").into()), "C.BAKE_BREAD");
    }

    #[test]
    fn absolute_command_with_named_argument() {
        let step = Command::new("PREHEAT_OVEN")
            .with_timing(doy("2020-060T03:45:19.000"))
            .with_arguments(Arguments::named([("temperature", Argument::from(100u64))]));
        assert_eq!(
            render(&step.into()),
            "A`2020-060T03:45:19.000`.PREHEAT_OVEN({\n  temperature: 100,\n})"
        );
    }

    #[test]
    fn float_encoded_integers_render_as_integers() {
        let step = Command::new("PREHEAT_OVEN").with_arguments(Arguments::named([
            ("temperature", Argument::Literal(Literal::Number(serde_json::Number::from_f64(100.0).unwrap()))),
            ("ratio", Argument::Literal(Literal::Number(serde_json::Number::from_f64(0.25).unwrap()))),
        ]));
        assert_eq!(
            render(&step.into()),
            "C.PREHEAT_OVEN({\n  temperature: 100,\n  ratio: 0.25,\n})"
        );
    }

    #[test]
    fn empty_arguments_are_elided_in_either_form() {
        let positional = Command::new("ECHO").with_arguments(Arguments::Positional(vec![]));
        let named = Command::new("ECHO").with_arguments(Arguments::Named(vec![]));
        assert_eq!(render(&positional.into()), "C.ECHO");
        assert_eq!(render(&named.into()), "C.ECHO");
    }

    #[test]
    fn positional_arguments_render_one_per_line() {
        let step = Command::new("ECHO")
            .with_timing(TimingTag::Relative(hms("00:00:01.000")))
            .with_arguments(Arguments::positional([
                Argument::from("string"),
                0u64.into(),
                true.into(),
            ]));
        assert_eq!(
            render(&step.into()),
            "R`00:00:01.000`.ECHO([\n  'string',\n  0,\n  true,\n])"
        );
    }

    #[test]
    fn nested_groups_indent_per_level() {
        let step = Command::new("SET_PAIRS").with_arguments(Arguments::named([(
            "pairs",
            Argument::Nested(Arguments::positional([1i64, 2])),
        )]));
        assert_eq!(
            render(&step.into()),
            "C.SET_PAIRS({\n  pairs: [\n    1,\n    2,\n  ],\n})"
        );
    }

    #[test]
    fn attribute_order_does_not_depend_on_attachment_order() {
        let a = Command::new("X")
            .with_timing(TimingTag::Epoch(hms("00:00:10.000")))
            .with_metadata(meta("Emery"))
            .with_description("d");
        let b = Command::new("X")
            .with_timing(TimingTag::Epoch(hms("00:00:10.000")))
            .with_description("d")
            .with_metadata(meta("Emery"));
        let expected = "E`00:00:10.000`.X\n  .DESCRIPTION('d')\n  .METADATA({\n    author: 'Emery',\n  })";
        assert_eq!(render(&a.into()), expected);
        assert_eq!(render(&b.into()), expected);
    }

    #[test]
    fn empty_description_and_metadata_are_omitted() {
        let step = Command::new("X")
            .with_description("")
            .with_metadata(Metadata::new());
        assert_eq!(render(&step.into()), "C.X");
    }

    #[test]
    fn ground_event_chains_typed_arguments() {
        let step = GroundEvent::new("Ground Event Name")
            .with_timing(doy("2020-001T00:00:00.000"))
            .with_args(Arguments::named([("name", Argument::from("hello"))]))
            .with_description("ground event description")
            .with_metadata(meta("Emery"));
        assert_eq!(
            render(&step.into()),
            "A`2020-001T00:00:00.000`.GROUND_EVENT('Ground Event Name')\n  .ARGUMENTS([\n    {\n      name: 'name',\n      type: 'string',\n      value: 'hello',\n    },\n  ])\n  .DESCRIPTION('ground event description')\n  .METADATA({\n    author: 'Emery',\n  })"
        );
    }

    #[test]
    fn ground_block_is_always_command_complete() {
        let step = GroundBlock::new("Ground Block Name")
            .with_args(Arguments::positional([Argument::from(7u64)]));
        assert_eq!(
            render(&step.into()),
            "C.GROUND_BLOCK('Ground Block Name')\n  .ARGUMENTS([\n    {\n      type: 'number',\n      value: 7,\n    },\n  ])"
        );
    }

    #[test]
    fn activate_emits_engine_epoch_and_models() {
        let call = SequenceCall::new("activate.name")
            .with_args(Arguments::named([("name", Argument::from("hello"))]))
            .with_engine(45)
            .with_epoch("epoch1")
            .with_models(vec![ModelAssignment {
                offset: hms("00:00:00.000"),
                value: Literal::from("1.234"),
                variable: "model_var_float".into(),
            }])
            .with_description("Activate a sequence")
            .with_metadata(meta("Ryan"));
        assert_eq!(
            render(&Step::Activate(call)),
            "C.ACTIVATE('activate.name')\n  .ARGUMENTS([\n    {\n      name: 'name',\n      type: 'string',\n      value: 'hello',\n    },\n  ])\n  .DESCRIPTION('Activate a sequence')\n  .ENGINE(45)\n  .EPOCH('epoch1')\n  .METADATA({\n    author: 'Ryan',\n  })\n  .MODELS([\n    {\n      offset: '00:00:00.000',\n      value: '1.234',\n      variable: 'model_var_float',\n    }\n  ])"
        );
    }

    #[test]
    fn load_uses_its_timing_tag() {
        let call = SequenceCall::new("load.name")
            .with_timing(TimingTag::Relative(hms("00:30:00.000")))
            .with_engine(1);
        assert_eq!(
            render(&Step::Load(call)),
            "R`00:30:00.000`.LOAD('load.name')\n  .ENGINE(1)"
        );
    }

    #[test]
    fn symbols_resolve_against_locals_then_parameters() {
        let locals = vec![Variable::float("temp", VariableOptions::default())];
        let parameters = vec![Variable::int("sugar", VariableOptions::default())];
        let options = RenderOptions::default();
        let renderer = EdslRenderer::new(SymbolTable::new(&locals, &parameters), &options);

        let step = Command::new("PREPARE_LOAF").with_arguments(Arguments::named([
            ("temperature", Argument::symbol("temp")),
            ("tb_sugar", Argument::symbol("sugar")),
        ]));
        assert_eq!(
            renderer.step(&step.into(), 0),
            "C.PREPARE_LOAF({\n  temperature: locals.temp,\n  tb_sugar: parameters.sugar,\n})"
        );
    }

    #[test]
    fn unknown_symbols_degrade_in_place() {
        let step: Step = Command::new("PREPARE_LOAF")
            .with_arguments(Arguments::named([
                ("tb_sugar", Argument::symbol("sugarrrrr")),
                ("gluten_free", Argument::from("FALSE")),
            ]))
            .into();
        assert_eq!(
            render(&step),
            "C.PREPARE_LOAF({\n  tb_sugar: unknown.sugarrrrr, //ERROR: Variable 'sugarrrrr' is not defined as a local or parameter\n  gluten_free: 'FALSE',\n})"
        );

        let legacy = RenderOptions {
            legacy_error_comments: true,
            ..Default::default()
        };
        assert_eq!(
            EdslRenderer::new(SymbolTable::empty(), &legacy).step(&step, 0),
            "C.PREPARE_LOAF({\n  tb_sugar: unknown.sugarrrrr //ERROR: Variable 'sugarrrrr' is not defined as a local or parameter,\n  gluten_free: 'FALSE',\n})"
        );
    }

    #[test]
    fn variables_with_options() {
        let options = RenderOptions::default();
        let renderer = EdslRenderer::new(SymbolTable::empty(), &options);

        let duration = Variable::uint(
            "duration",
            VariableOptions {
                allowable_ranges: Some(vec![AllowableRange::new(1, 3600)]),
                sc_name: Some("BAN-NATION".into()),
                ..Default::default()
            },
        );
        assert_eq!(
            renderer.variable(&duration, 3),
            "UINT('duration', {\n        allowable_ranges: [\n          {\n            max: 3600,\n            min: 1,\n          },\n        ],\n        sc_name: 'BAN-NATION',\n      })"
        );

        let enumeration = Variable::enumeration(
            "mode",
            "MODES",
            VariableOptions {
                allowable_values: Some(vec![
                    AllowableValue::String("ON".into()),
                    AllowableValue::Number(3.into()),
                ]),
                ..Default::default()
            },
        );
        assert_eq!(
            renderer.variable(&enumeration, 0),
            "ENUM('mode', 'MODES', {\n  allowable_values: [\n    'ON',\n    3,\n  ],\n})"
        );
        assert_eq!(
            renderer.variable(&Variable::float("temp", VariableOptions::default()), 0),
            "FLOAT('temp')"
        );
    }

    #[test]
    fn hardware_attributes_sit_at_the_stem_column() {
        let options = RenderOptions::default();
        let renderer = EdslRenderer::new(SymbolTable::empty(), &options);
        let hardware = HardwareCommand::new("HDW_PYRO_ENGINE").with_description("FIRE THE PYROS");
        assert_eq!(
            renderer.hardware_command(&hardware, 3),
            "HDW_PYRO_ENGINE\n      .DESCRIPTION('FIRE THE PYROS')"
        );
    }

    #[test]
    fn request_keys_in_fixed_order() {
        let options = RenderOptions::default();
        let renderer = EdslRenderer::new(SymbolTable::empty(), &options);
        let request = Request::new("power", vec![Command::new("ADD_WATER").into()])
            .with_description("Set the power")
            .with_ground_epoch("activate", "now")
            .with_metadata(meta("rrgoetz"));
        assert_eq!(
            renderer.request(&request, 0),
            "{\n  name: 'power',\n  steps: [\n    C.ADD_WATER,\n  ],\n  type: 'request',\n  description: 'Set the power',\n  ground_epoch: {\n    delta: 'now',\n    name: 'activate',\n  },\n  metadata: {\n    author: 'rrgoetz',\n  },\n}"
        );
    }

    #[test]
    fn a_name_in_both_tables_renders_as_the_local() {
        let options = RenderOptions::default();
        let seq = Sequence::new("shadow")
            .with_locals(vec![Variable::uint("duration", VariableOptions::default())])
            .with_parameters(vec![Variable::uint("duration", VariableOptions::default())])
            .with_steps(vec![
                Command::new("WAIT")
                    .with_arguments(Arguments::named([("seconds", Argument::symbol("duration"))]))
                    .into(),
            ]);
        assert_eq!(
            EdslRenderer::new(seq.symbol_table(), &options).sequence(&seq),
            "export default () =>\n  Sequence.new({\n    seqId: 'shadow',\n    metadata: {},\n    locals: [\n      UINT('duration')\n    ],\n    parameters: [\n      UINT('duration')\n    ],\n    steps: ({ locals, parameters }) => ([\n      C.WAIT({\n        seconds: locals.duration,\n      }),\n    ]),\n  });"
        );
    }

    #[test]
    fn empty_steps_list_is_not_emitted() {
        let options = RenderOptions::default();
        let seq = Sequence::new("test").with_steps(vec![]);
        assert_eq!(
            EdslRenderer::new(seq.symbol_table(), &options).sequence(&seq),
            "export default () =>\n  Sequence.new({\n    seqId: 'test',\n    metadata: {},\n  });"
        );
    }
}
