//! The plain template: inputs then outputs in a single div, no
//! decoration.

use crate::component::Component;
use crate::html;
use crate::template::{FragmentRegistry, Role, Template};

#[derive(Debug, Clone, Default)]
pub struct Flat {
    registry: FragmentRegistry,
}

impl Flat {
    pub fn new() -> Flat {
        Flat::default()
    }
}

impl Template for Flat {
    fn registry(&self) -> &FragmentRegistry {
        &self.registry
    }

    fn registry_mut(&mut self) -> &mut FragmentRegistry {
        &mut self.registry
    }

    fn perform_layout(&self) -> Component {
        html::div(
            self.containers(Role::Input)
                .iter()
                .chain(self.containers(Role::Output))
                .cloned(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::PropValue;
    use crate::controls;

    #[test]
    fn t_inputs_before_outputs() {
        let mut tpl = Flat::new();
        tpl.add_component(controls::graph(), Role::Output, None);
        tpl.add_component(controls::slider(0.0, 1.0), Role::Input, None);
        let layout = tpl.layout();
        let children = layout.get_children();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0],
                   PropValue::from(html::div([controls::slider(0.0, 1.0)])));
        assert_eq!(children[1],
                   PropValue::from(html::div([controls::graph()])));
    }

    #[test]
    fn t_layout_idempotent() {
        let mut tpl = Flat::new();
        tpl.add_component(controls::text_field("x"), Role::Input, Some("X"));
        assert_eq!(tpl.layout(), tpl.layout());
    }
}
