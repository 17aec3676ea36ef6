//! The serializable component tree: the Rust-side data model of the
//! host framework's UI fragments. A component is opaque to this layer
//! beyond `{namespace, type, props}`; rendering semantics are owned
//! by the external UI-element library.

use std::collections::BTreeMap;

use kstring::KString;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::uid::IdRecord;

pub fn ks(s: &str) -> KString {
    KString::from_ref(s)
}

/// A prop value: a nested component, a list, or plain JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    Component(Box<Component>),
    List(Vec<PropValue>),
    Value(Value),
}

impl From<Component> for PropValue {
    fn from(c: Component) -> Self {
        PropValue::Component(Box::new(c))
    }
}

impl From<Vec<PropValue>> for PropValue {
    fn from(l: Vec<PropValue>) -> Self {
        PropValue::List(l)
    }
}

impl From<Value> for PropValue {
    fn from(v: Value) -> Self {
        PropValue::Value(v)
    }
}

impl From<&str> for PropValue {
    fn from(s: &str) -> Self {
        PropValue::Value(Value::from(s))
    }
}

impl From<String> for PropValue {
    fn from(s: String) -> Self {
        PropValue::Value(Value::from(s))
    }
}

impl From<i64> for PropValue {
    fn from(n: i64) -> Self {
        PropValue::Value(Value::from(n))
    }
}

impl From<f64> for PropValue {
    fn from(n: f64) -> Self {
        PropValue::Value(Value::from(n))
    }
}

impl From<bool> for PropValue {
    fn from(b: bool) -> Self {
        PropValue::Value(Value::from(b))
    }
}

impl From<&IdRecord> for PropValue {
    fn from(id: &IdRecord) -> Self {
        PropValue::Value(id.to_value())
    }
}

/// An opaque UI fragment in the host framework's wire shape:
/// `{"namespace": ..., "type": ..., "props": {...}}`. Children, when
/// any, live under `props["children"]`. Equality is structural.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub namespace: KString,
    #[serde(rename = "type")]
    pub type_name: KString,
    pub props: BTreeMap<KString, PropValue>,
}

impl Component {
    pub fn new(namespace: &str, type_name: &str) -> Component {
        Component {
            namespace: ks(namespace),
            type_name: ks(type_name),
            props: BTreeMap::new(),
        }
    }

    pub fn prop(mut self, key: &str, value: impl Into<PropValue>) -> Component {
        self.props.insert(ks(key), value.into());
        self
    }

    /// Set the `style` prop from key/value pairs; values are CSS
    /// strings or bare numbers (pixel counts), as the host expects.
    pub fn style(self, pairs: &[(&str, Value)]) -> Component {
        let style: serde_json::Map<String, Value> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        self.prop("style", Value::Object(style))
    }

    pub fn class_name(self, name: &str) -> Component {
        self.prop("className", name)
    }

    pub fn id(self, id: &IdRecord) -> Component {
        self.prop("id", id)
    }

    pub fn children(self, children: impl IntoIterator<Item = Component>) -> Component {
        self.prop(
            "children",
            children
                .into_iter()
                .map(PropValue::from)
                .collect::<Vec<_>>(),
        )
    }

    pub fn get_prop(&self, key: &str) -> Option<&PropValue> {
        self.props.get(key)
    }

    /// The `children` list, empty when the prop is missing or not a
    /// list.
    pub fn get_children(&self) -> &[PropValue] {
        match self.props.get("children") {
            Some(PropValue::List(l)) => l,
            _ => &[],
        }
    }
}
