//! The card template: optional heading, outputs, a separator, inputs,
//! wrapped in a bordered, padded, rounded container.

use serde_json::json;

use crate::component::Component;
use crate::html;
use crate::template::{FragmentRegistry, Role, Template};

const INLINE_CSS: &str = "\
        <style>
        .controls-slider {
            padding: 12px 20px 12px 20px !important;
         }
        </style>";

#[derive(Debug, Clone, Default)]
pub struct Card {
    title: Option<String>,
    width: Option<String>,
    registry: FragmentRegistry,
}

impl Card {
    /// `width` is a CSS width for the whole card (e.g. `"500px"`,
    /// `"50%"`).
    pub fn new(title: Option<&str>, width: Option<&str>) -> Card {
        Card {
            title: title.map(|s| s.to_string()),
            width: width.map(|s| s.to_string()),
            registry: FragmentRegistry::default(),
        }
    }
}

impl Template for Card {
    fn registry(&self) -> &FragmentRegistry {
        &self.registry
    }

    fn registry_mut(&mut self) -> &mut FragmentRegistry {
        &mut self.registry
    }

    fn perform_layout(&self) -> Component {
        let mut children = Vec::new();
        if let Some(title) = &self.title {
            children.push(html::h2(title));
        }
        children.push(html::div(self.containers(Role::Output).to_vec()));
        children.push(html::hr());
        children.push(html::div(self.containers(Role::Input).to_vec()));
        html::div([html::div(children)]).style(&[
            ("width", json!(self.width)),
            ("border", json!("1px solid lightgray")),
            ("padding", json!(10)),
            ("border-radius", json!("6px")),
        ])
    }

    fn inline_css(&self) -> Option<&str> {
        Some(INLINE_CSS)
    }
}

#[cfg(test)]
mod tests {
    use crate::component::PropValue;
    use crate::controls;

    use super::*;

    fn sample() -> Card {
        let mut tpl = Card::new(Some("Simple App"), Some("500px"));
        tpl.add_component(controls::slider(1.0, 10.0), Role::Input,
                          Some("Phase"));
        tpl.add_component(controls::graph(), Role::Output, None);
        tpl
    }

    #[test]
    fn t_section_order() {
        let layout = sample().layout();
        let inner = match &layout.get_children()[0] {
            PropValue::Component(c) => c,
            other => panic!("expected inner div, got {:?}", other),
        };
        let sections = inner.get_children();
        assert_eq!(sections.len(), 4);
        assert_eq!(sections[0], PropValue::from(html::h2("Simple App")));
        // outputs div, then hr, then inputs div
        assert_eq!(
            sections[1],
            PropValue::from(html::div([html::div([controls::graph()])])));
        assert_eq!(sections[2], PropValue::from(html::hr()));
        assert_eq!(
            sections[3],
            PropValue::from(html::div([html::div([
                html::label("Phase"),
                controls::slider(1.0, 10.0),
            ])])));
    }

    #[test]
    fn t_no_title_no_heading() {
        let mut tpl = Card::new(None, None);
        tpl.add_component(controls::graph(), Role::Output, None);
        let layout = tpl.layout();
        let inner = match &layout.get_children()[0] {
            PropValue::Component(c) => c,
            other => panic!("expected inner div, got {:?}", other),
        };
        assert_eq!(inner.get_children().len(), 3);
    }

    #[test]
    fn t_wrapper_style() {
        let layout = sample().layout();
        let style = match layout.get_prop("style") {
            Some(PropValue::Value(v)) => v,
            other => panic!("expected style prop, got {:?}", other),
        };
        assert_eq!(style["width"], json!("500px"));
        assert_eq!(style["border"], json!("1px solid lightgray"));
    }

    #[test]
    fn t_layout_idempotent() {
        let tpl = sample();
        assert_eq!(tpl.layout(), tpl.layout());
    }

    #[test]
    fn t_carries_slider_css() {
        assert!(sample().inline_css().unwrap().contains(".controls-slider"));
    }
}
