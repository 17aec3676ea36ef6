//! Constructors for the HTML-flavored elements the templates emit,
//! namespace `"html"`.

use crate::component::Component;

pub const NAMESPACE: &str = "html";

pub fn div(children: impl IntoIterator<Item = Component>) -> Component {
    Component::new(NAMESPACE, "Div").children(children)
}

pub fn h2(text: &str) -> Component {
    Component::new(NAMESPACE, "H2").prop("children", text)
}

pub fn hr() -> Component {
    Component::new(NAMESPACE, "Hr")
}

pub fn label(text: &str) -> Component {
    Component::new(NAMESPACE, "Label").prop("children", text)
}
