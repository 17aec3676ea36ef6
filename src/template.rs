//! Template composition: registered input/output fragments arranged
//! into a layout tree. Layout production is pure and idempotent (the
//! host framework may invoke it more than once), so all state changes
//! happen at registration time.

use strum_macros::{Display, EnumString};

use crate::component::Component;
use crate::html;

/// Which template region a fragment belongs to. Parses from
/// `"input"` / `"output"`; anything else is a configuration error at
/// the parse site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Input,
    Output,
}

/// Per-role ordered fragment containers. Fragments are wrapped into
/// their per-fragment container div (label element first, when given)
/// at registration time, keeping layout production free of
/// construction work.
#[derive(Debug, Clone, Default)]
pub struct FragmentRegistry {
    inputs: Vec<Component>,
    outputs: Vec<Component>,
}

impl FragmentRegistry {
    pub fn add(&mut self, component: Component, role: Role, label: Option<&str>) {
        tracing::debug!(%role, label, "component registered");
        let container = match label {
            Some(text) => html::div([html::label(text), component]),
            None => html::div([component]),
        };
        match role {
            Role::Input => self.inputs.push(container),
            Role::Output => self.outputs.push(container),
        }
    }

    /// The registered containers of a role, in registration order.
    pub fn containers(&self, role: Role) -> &[Component] {
        match role {
            Role::Input => &self.inputs,
            Role::Output => &self.outputs,
        }
    }
}

/// A layout convention composing registered fragments into a section
/// tree. `perform_layout` must be a pure function of the current
/// registrations: no callbacks, no identifier generation, no other
/// side effects.
pub trait Template {
    fn registry(&self) -> &FragmentRegistry;
    fn registry_mut(&mut self) -> &mut FragmentRegistry;

    /// The template-specific composition; pure and idempotent.
    fn perform_layout(&self) -> Component;

    /// Register a pre-built fragment under a role, optionally
    /// labeled.
    fn add_component(&mut self, component: Component, role: Role, label: Option<&str>) {
        self.registry_mut().add(component, role, label)
    }

    fn containers(&self, role: Role) -> &[Component] {
        self.registry().containers(role)
    }

    /// The host-facing entry point.
    fn layout(&self) -> Component {
        tracing::debug!(
            inputs = self.containers(Role::Input).len(),
            outputs = self.containers(Role::Output).len(),
            "producing layout");
        self.perform_layout()
    }

    /// Template-scoped CSS for the host to inject, if any.
    fn inline_css(&self) -> Option<&str> {
        None
    }
}
