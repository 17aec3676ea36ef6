//! The sidebar template: optional full-width heading, then a flex row
//! with the inputs in a bordered sidebar column and the outputs
//! filling the remainder.

use serde_json::json;

use crate::component::Component;
use crate::html;
use crate::template::{FragmentRegistry, Role, Template};

/// Grid granularity the sidebar width is expressed in.
pub const GRID_COLUMNS: u32 = 12;

#[derive(Debug, Clone)]
pub struct Sidebar {
    title: Option<String>,
    sidebar_columns: u32,
    registry: FragmentRegistry,
}

impl Sidebar {
    /// `sidebar_columns` is the sidebar's share of a
    /// [`GRID_COLUMNS`]-column grid, clamped to the grid.
    pub fn new(title: Option<&str>, sidebar_columns: u32) -> Sidebar {
        Sidebar {
            title: title.map(|s| s.to_string()),
            sidebar_columns: sidebar_columns.clamp(1, GRID_COLUMNS),
            registry: FragmentRegistry::default(),
        }
    }
}

impl Default for Sidebar {
    fn default() -> Self {
        Sidebar::new(None, 4)
    }
}

impl Template for Sidebar {
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
        let sidebar = html::div(self.containers(Role::Input).to_vec())
            .style(&[
                ("width", json!(format!("{}%",
                                        self.sidebar_columns * 100 / GRID_COLUMNS))),
                ("border", json!("1px solid lightgray")),
                ("padding", json!(10)),
            ]);
        let main = html::div(self.containers(Role::Output).to_vec())
            .style(&[("flex", json!(1)), ("padding", json!(10))]);
        children.push(
            html::div([sidebar, main]).style(&[("display", json!("flex"))]));
        html::div(children)
    }
}

#[cfg(test)]
mod tests {
    use crate::component::PropValue;
    use crate::controls;

    use super::*;

    fn row_of(layout: &Component) -> Component {
        match layout.get_children().last() {
            Some(PropValue::Component(c)) => (**c).clone(),
            other => panic!("expected flex row, got {:?}", other),
        }
    }

    #[test]
    fn t_inputs_in_sidebar_outputs_in_main() {
        let mut tpl = Sidebar::new(Some("Sample App"), 4);
        tpl.add_component(controls::dropdown(&["sin", "cos"]), Role::Input,
                          Some("Function"));
        tpl.add_component(controls::graph(), Role::Output, None);
        let layout = tpl.layout();
        assert_eq!(layout.get_children()[0],
                   PropValue::from(html::h2("Sample App")));
        let row = row_of(&layout);
        let cols = row.get_children();
        assert_eq!(cols.len(), 2);
        let sidebar = match &cols[0] {
            PropValue::Component(c) => c,
            other => panic!("expected sidebar div, got {:?}", other),
        };
        assert_eq!(sidebar.get_children(),
                   [PropValue::from(html::div([
                       html::label("Function"),
                       controls::dropdown(&["sin", "cos"]),
                   ]))]);
    }

    #[test]
    fn t_sidebar_width_from_columns() {
        let tpl = Sidebar::new(None, 3);
        let row = row_of(&tpl.layout());
        let sidebar = match &row.get_children()[0] {
            PropValue::Component(c) => (**c).clone(),
            other => panic!("expected sidebar div, got {:?}", other),
        };
        let style = match sidebar.get_prop("style") {
            Some(PropValue::Value(v)) => v.clone(),
            other => panic!("expected style prop, got {:?}", other),
        };
        assert_eq!(style["width"], json!("25%"));
    }

    #[test]
    fn t_columns_clamped_to_grid() {
        let tpl = Sidebar::new(None, 99);
        let row = row_of(&tpl.layout());
        let sidebar = match &row.get_children()[0] {
            PropValue::Component(c) => (**c).clone(),
            other => panic!("expected sidebar div, got {:?}", other),
        };
        let style = match sidebar.get_prop("style") {
            Some(PropValue::Value(v)) => v.clone(),
            other => panic!("expected style prop, got {:?}", other),
        };
        assert_eq!(style["width"], json!("100%"));
    }

    #[test]
    fn t_layout_idempotent() {
        let mut tpl = Sidebar::default();
        tpl.add_component(controls::slider(1.0, 10.0), Role::Input,
                          Some("Amplitude"));
        tpl.add_component(controls::graph(), Role::Output, None);
        assert_eq!(tpl.layout(), tpl.layout());
    }
}
