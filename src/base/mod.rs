//! # Shared Node Identity
//!
//! Every node of the object tree (object, object instance, resource) carries the same
//! identity and metadata: a name, a numeric instance id, a static/dynamic mode, the
//! operations a remote peer may perform, and whether it can be observed.
//!
//! [`Base`] bundles these fields so containers and entities don't re-declare them.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Whether a node's value is fixed at creation time or mutable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Static,
    Dynamic,
}

/// Operations a remote peer may perform on a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    #[default]
    NotAllowed,
    GetAllowed,
    PutAllowed,
    GetPutAllowed,
}

impl Operation {
    pub fn allows_get(self) -> bool {
        matches!(self, Operation::GetAllowed | Operation::GetPutAllowed)
    }

    pub fn allows_put(self) -> bool {
        matches!(self, Operation::PutAllowed | Operation::GetPutAllowed)
    }
}

/// Kind tag shared by all tree nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BaseType {
    Object,
    ObjectInstance,
    Resource,
}

impl Display for BaseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            BaseType::Object => "Object",
            BaseType::ObjectInstance => "ObjectInstance",
            BaseType::Resource => "Resource",
        };
        f.write_str(tag)
    }
}

/// Identity and metadata common to every node in the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Base {
    name: String,
    instance_id: u16,
    mode: Mode,
    operation: Operation,
    observable: bool,
    base_type: BaseType,
}

impl Base {
    /// Creates a node identity with instance id 0, no allowed operations and
    /// observation disabled.
    pub fn new(name: impl Into<String>, mode: Mode, base_type: BaseType) -> Self {
        Self {
            name: name.into(),
            instance_id: 0,
            mode,
            operation: Operation::NotAllowed,
            observable: false,
            base_type,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn instance_id(&self) -> u16 {
        self.instance_id
    }

    pub fn set_instance_id(&mut self, instance_id: u16) {
        self.instance_id = instance_id;
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn set_operation(&mut self, operation: Operation) {
        self.operation = operation;
    }

    pub fn is_observable(&self) -> bool {
        self.observable
    }

    pub fn set_observable(&mut self, observable: bool) {
        self.observable = observable;
    }

    pub fn base_type(&self) -> BaseType {
        self.base_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_base_starts_at_instance_zero() {
        let base = Base::new("3303", Mode::Dynamic, BaseType::ObjectInstance);
        assert_eq!(base.name(), "3303");
        assert_eq!(base.instance_id(), 0);
        assert_eq!(base.operation(), Operation::NotAllowed);
        assert!(!base.is_observable());
    }

    #[test]
    fn operation_permissions() {
        assert!(Operation::GetAllowed.allows_get());
        assert!(!Operation::GetAllowed.allows_put());
        assert!(Operation::GetPutAllowed.allows_get());
        assert!(Operation::GetPutAllowed.allows_put());
        assert!(!Operation::NotAllowed.allows_get());
    }

    #[test]
    fn base_serde_roundtrip() {
        let mut base = Base::new("5700", Mode::Static, BaseType::Resource);
        base.set_instance_id(3);
        base.set_operation(Operation::GetAllowed);

        let json = serde_json::to_value(&base).unwrap();
        assert_eq!(json["mode"], "static");
        assert_eq!(json["operation"], "get_allowed");
        assert_eq!(json["base_type"], "Resource");

        let back: Base = serde_json::from_value(json).unwrap();
        assert_eq!(back, base);
    }

    #[test]
    fn base_type_tag() {
        assert_eq!(BaseType::ObjectInstance.to_string(), "ObjectInstance");
    }
}
