//! Explicit parameter binding: a configuration mapping parameter
//! names to widget descriptors, and a construction function that
//! builds the widgets (with deterministic identifier records),
//! registers them into a template and returns the input/output
//! binding map the host framework wires its callbacks to.

use std::collections::BTreeMap;

use itertools::Itertools;
use kstring::KString;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::component::{ks, Component};
use crate::controls;
use crate::html;
use crate::template::{Role, Template};
use crate::uid::{IdRecord, UidGenerator};

#[derive(Debug, Clone, PartialEq)]
enum WidgetKind {
    Dropdown { options: Vec<String> },
    Slider { min: f64, max: f64, step: Option<f64> },
    Text { value: String },
    Checklist { options: Vec<String> },
}

/// Declarative description of one input control. Shorthand
/// conversions mirror the common patterns: an options list means a
/// dropdown, a `(min, max)` pair a slider, a bare string a text
/// field.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetSpec {
    kind: WidgetKind,
    label: Option<String>,
    value: Option<Value>,
}

impl WidgetSpec {
    fn from_kind(kind: WidgetKind) -> WidgetSpec {
        WidgetSpec { kind, label: None, value: None }
    }

    pub fn dropdown(options: &[&str]) -> WidgetSpec {
        WidgetSpec::from_kind(WidgetKind::Dropdown {
            options: options.iter().map(|s| s.to_string()).collect(),
        })
    }

    pub fn slider(min: f64, max: f64) -> WidgetSpec {
        WidgetSpec::from_kind(WidgetKind::Slider { min, max, step: None })
    }

    pub fn text(value: &str) -> WidgetSpec {
        WidgetSpec::from_kind(WidgetKind::Text { value: value.to_string() })
    }

    pub fn checklist(options: &[&str]) -> WidgetSpec {
        WidgetSpec::from_kind(WidgetKind::Checklist {
            options: options.iter().map(|s| s.to_string()).collect(),
        })
    }

    /// Slider step size; ignored by the other widget kinds.
    pub fn step(mut self, step: f64) -> WidgetSpec {
        if let WidgetKind::Slider { step: s, .. } = &mut self.kind {
            *s = Some(step);
        }
        self
    }

    pub fn label(mut self, text: &str) -> WidgetSpec {
        self.label = Some(text.to_string());
        self
    }

    /// Initial value, overriding the widget's default.
    pub fn value(mut self, value: impl Into<Value>) -> WidgetSpec {
        self.value = Some(value.into());
        self
    }
}

impl From<&[&str]> for WidgetSpec {
    fn from(options: &[&str]) -> Self {
        WidgetSpec::dropdown(options)
    }
}

impl From<(f64, f64)> for WidgetSpec {
    fn from((min, max): (f64, f64)) -> Self {
        WidgetSpec::slider(min, max)
    }
}

impl From<&str> for WidgetSpec {
    fn from(value: &str) -> Self {
        WidgetSpec::text(value)
    }
}

/// What a return value is bound to: a plain container (bound on
/// `children`) or a graph (bound on `figure`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputSpec {
    Container,
    Graph,
}

impl OutputSpec {
    fn build(&self) -> (Component, &'static str) {
        match self {
            OutputSpec::Container => (html::div([]), "children"),
            OutputSpec::Graph => (controls::graph(), "figure"),
        }
    }
}

/// Ordered parameter-name → widget-descriptor mapping plus output
/// specs. When no output is configured, one container output is
/// implied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BindingConfig {
    params: Vec<(KString, WidgetSpec)>,
    outputs: Vec<OutputSpec>,
}

impl BindingConfig {
    pub fn new() -> BindingConfig {
        BindingConfig::default()
    }

    pub fn param(mut self, name: &str, spec: impl Into<WidgetSpec>) -> BindingConfig {
        self.params.push((ks(name), spec.into()));
        self
    }

    pub fn output(mut self, spec: OutputSpec) -> BindingConfig {
        self.outputs.push(spec);
        self
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BindError {
    #[error("duplicate parameter name {0:?}")]
    DuplicateParameter(KString),
    #[error("dropdown for parameter {0:?} has no options")]
    EmptyOptions(KString),
    #[error("checklist for parameter {0:?} has no options")]
    EmptyChecklist(KString),
    #[error("slider for parameter {0:?} has inverted range {1}..{2}")]
    InvertedRange(KString, f64, f64),
}

/// The `(id record, prop name)` pair the host framework wires a
/// callback argument or return value to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dependency {
    pub id: IdRecord,
    pub prop: KString,
}

/// The binding map handed to the host framework: which component
/// prop each parameter reads from, and which props the return values
/// write to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterBinding {
    pub inputs: BTreeMap<KString, Dependency>,
    pub outputs: Vec<Dependency>,
}

fn build_widget(spec: &WidgetSpec) -> Component {
    let mut component = match &spec.kind {
        WidgetKind::Dropdown { options } => {
            let opts: Vec<&str> = options.iter().map(|s| s.as_str()).collect();
            controls::dropdown(&opts)
        }
        WidgetKind::Slider { min, max, step } => {
            let c = controls::slider(*min, *max);
            match step {
                Some(step) => c.prop("step", *step),
                None => c,
            }
        }
        WidgetKind::Text { value } => controls::text_field(value),
        WidgetKind::Checklist { options } => {
            let opts: Vec<&str> = options.iter().map(|s| s.as_str()).collect();
            controls::checklist(&opts)
        }
    };
    if let Some(value) = &spec.value {
        component = component.prop("value", value.clone());
    }
    component
}

fn validate(config: &BindingConfig) -> Result<(), BindError> {
    if let Some(name) = config.params.iter().map(|(name, _)| name)
        .duplicates().next()
    {
        return Err(BindError::DuplicateParameter(name.clone()));
    }
    for (name, spec) in &config.params {
        match &spec.kind {
            WidgetKind::Dropdown { options } if options.is_empty() =>
                return Err(BindError::EmptyOptions(name.clone())),
            WidgetKind::Checklist { options } if options.is_empty() =>
                return Err(BindError::EmptyChecklist(name.clone())),
            WidgetKind::Slider { min, max, .. } if max < min =>
                return Err(BindError::InvertedRange(name.clone(), *min, *max)),
            _ => (),
        }
    }
    Ok(())
}

/// Build the configured widgets, register them into `template` and
/// return the binding map. Widgets are registered in configuration
/// order; each gets a fresh identifier record (`name` = parameter
/// name for inputs, `index` = position for outputs), so binding
/// against a reset generator is fully reproducible.
pub fn bind_parameters(
    template: &mut dyn Template,
    config: &BindingConfig,
    uids: &UidGenerator,
) -> Result<ParameterBinding, BindError> {
    validate(config)?;

    let mut binding = ParameterBinding::default();
    for (name, spec) in &config.params {
        let id = uids.build_id(Some(name.as_str()), &[]);
        let component = build_widget(spec).id(&id);
        template.add_component(component, Role::Input, spec.label.as_deref());
        binding.inputs.insert(
            name.clone(),
            Dependency { id, prop: ks("value") });
    }

    let implied = [OutputSpec::Container];
    let outputs: &[OutputSpec] = if config.outputs.is_empty() {
        &implied
    } else {
        &config.outputs
    };
    for (index, spec) in outputs.iter().enumerate() {
        let id = uids.build_id(None, &[("index", Value::from(index as i64))]);
        let (component, prop) = spec.build();
        template.add_component(component.id(&id), Role::Output, None);
        binding.outputs.push(Dependency { id, prop: ks(prop) });
    }

    tracing::debug!(
        inputs = binding.inputs.len(),
        outputs = binding.outputs.len(),
        "parameter binding constructed");
    Ok(binding)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::component::PropValue;
    use crate::templates::card::Card;
    use crate::templates::flat::Flat;
    use crate::uid::RESET_SEED_KEY;

    // The configuration of the sine-controls demo
    fn sine_config() -> BindingConfig {
        BindingConfig::new()
            .param("fun", WidgetSpec::dropdown(&["sin", "cos", "exp"])
                   .label("Function"))
            .param("figure_title", WidgetSpec::text("Initial Title")
                   .label("Figure Title"))
            .param("phase", WidgetSpec::slider(1.0, 10.0).label("Phase"))
            .param("amplitude", WidgetSpec::slider(1.0, 10.0).value(3.0)
                   .label("Amplitude"))
            .output(OutputSpec::Graph)
    }

    #[test]
    fn t_sine_binding_map() {
        let mut tpl = Card::new(Some("Sine"), None);
        let uids = UidGenerator::with_seed(RESET_SEED_KEY);
        let binding = bind_parameters(&mut tpl, &sine_config(), &uids).unwrap();

        assert_eq!(binding.inputs.len(), 4);
        let fun = &binding.inputs["fun"];
        assert_eq!(fun.prop, "value");
        assert_eq!(fun.id.get("name"), Some(&json!("fun")));
        // first draw after the deterministic seed
        assert_eq!(fun.id.uid(), "e3e70682-c209-4cac-629f-6fbed82c07cd");

        assert_eq!(binding.outputs.len(), 1);
        let out = &binding.outputs[0];
        assert_eq!(out.prop, "figure");
        assert_eq!(out.id.get("index"), Some(&json!(0)));

        // the four inputs plus the graph got registered
        assert_eq!(tpl.containers(Role::Input).len(), 4);
        assert_eq!(tpl.containers(Role::Output).len(), 1);
    }

    #[test]
    fn t_binding_reproducible_over_reset() {
        let uids = UidGenerator::with_seed(77);
        let mut tpl1 = Flat::new();
        uids.reset();
        let b1 = bind_parameters(&mut tpl1, &sine_config(), &uids).unwrap();
        let mut tpl2 = Flat::new();
        uids.reset();
        let b2 = bind_parameters(&mut tpl2, &sine_config(), &uids).unwrap();
        assert_eq!(b1, b2);
        assert_eq!(tpl1.layout(), tpl2.layout());
    }

    #[test]
    fn t_value_override_reaches_widget() {
        let mut tpl = Flat::new();
        let uids = UidGenerator::with_seed(RESET_SEED_KEY);
        bind_parameters(&mut tpl, &sine_config(), &uids).unwrap();
        // amplitude is the fourth input; its container wraps label
        // then widget
        let container = &tpl.containers(Role::Input)[3];
        let widget = match &container.get_children()[1] {
            PropValue::Component(c) => c,
            other => panic!("expected widget, got {:?}", other),
        };
        assert_eq!(widget.get_prop("value"), Some(&PropValue::from(3.0)));
    }

    #[test]
    fn t_implied_container_output() {
        let mut tpl = Flat::new();
        let uids = UidGenerator::with_seed(RESET_SEED_KEY);
        let config = BindingConfig::new().param("x", WidgetSpec::text(""));
        let binding = bind_parameters(&mut tpl, &config, &uids).unwrap();
        assert_eq!(binding.outputs.len(), 1);
        assert_eq!(binding.outputs[0].prop, "children");
    }

    #[test]
    fn t_shorthand_conversions() {
        assert_eq!(WidgetSpec::from(&["a", "b"][..]),
                   WidgetSpec::dropdown(&["a", "b"]));
        assert_eq!(WidgetSpec::from((1.0, 10.0)),
                   WidgetSpec::slider(1.0, 10.0));
        assert_eq!(WidgetSpec::from("hello"), WidgetSpec::text("hello"));
    }

    #[test]
    fn t_duplicate_parameter_rejected() {
        let mut tpl = Flat::new();
        let uids = UidGenerator::with_seed(RESET_SEED_KEY);
        let config = BindingConfig::new()
            .param("x", WidgetSpec::text(""))
            .param("x", WidgetSpec::slider(0.0, 1.0));
        assert_eq!(bind_parameters(&mut tpl, &config, &uids),
                   Err(BindError::DuplicateParameter(ks("x"))));
    }

    #[test]
    fn t_empty_options_rejected() {
        let mut tpl = Flat::new();
        let uids = UidGenerator::with_seed(RESET_SEED_KEY);
        let config = BindingConfig::new()
            .param("fun", WidgetSpec::dropdown(&[]));
        assert_eq!(bind_parameters(&mut tpl, &config, &uids),
                   Err(BindError::EmptyOptions(ks("fun"))));
    }

    #[test]
    fn t_inverted_range_rejected() {
        let mut tpl = Flat::new();
        let uids = UidGenerator::with_seed(RESET_SEED_KEY);
        let config = BindingConfig::new()
            .param("phase", WidgetSpec::slider(10.0, 1.0));
        assert_eq!(bind_parameters(&mut tpl, &config, &uids),
                   Err(BindError::InvertedRange(ks("phase"), 10.0, 1.0)));
    }

    #[test]
    fn t_failed_binding_registers_nothing() {
        let mut tpl = Flat::new();
        let uids = UidGenerator::with_seed(RESET_SEED_KEY);
        let config = BindingConfig::new()
            .param("a", WidgetSpec::text(""))
            .param("fun", WidgetSpec::checklist(&[]));
        assert!(bind_parameters(&mut tpl, &config, &uids).is_err());
        assert!(tpl.containers(Role::Input).is_empty());
        assert!(tpl.containers(Role::Output).is_empty());
    }
}
