//! Constructors for the pre-built input/output widgets, namespace
//! `"controls"`. These return plain components; identifier records
//! are attached by the binding layer (`binding::bind_parameters`).

use serde_json::{json, Value};

use crate::component::Component;

pub const NAMESPACE: &str = "controls";

/// A dropdown over the given options; the initial `value` is the
/// first option.
pub fn dropdown(options: &[&str]) -> Component {
    let opts: Vec<Value> = options
        .iter()
        .map(|o| json!({"label": o, "value": o}))
        .collect();
    let mut c = Component::new(NAMESPACE, "Dropdown")
        .prop("options", Value::Array(opts));
    if let Some(first) = options.first() {
        c = c.prop("value", *first);
    }
    c
}

/// A slider over `[min, max]`; the initial `value` is `min`.
pub fn slider(min: f64, max: f64) -> Component {
    Component::new(NAMESPACE, "Slider")
        .prop("min", min)
        .prop("max", max)
        .prop("value", min)
}

pub fn text_field(value: &str) -> Component {
    Component::new(NAMESPACE, "Input").prop("value", value)
}

/// A checklist over the given options; nothing checked initially.
pub fn checklist(options: &[&str]) -> Component {
    let opts: Vec<Value> = options
        .iter()
        .map(|o| json!({"label": o, "value": o}))
        .collect();
    Component::new(NAMESPACE, "Checklist")
        .prop("options", Value::Array(opts))
        .prop("value", Value::Array(vec![]))
}

/// An (initially empty) graph output.
pub fn graph() -> Component {
    Component::new(NAMESPACE, "Graph")
}
