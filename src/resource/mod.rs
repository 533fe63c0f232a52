//! # Resource
//!
//! Leaf-level value slots of the object tree.
//!
//! ## Structure
//!
//! - [`entity`] - [`ResourceEntity`] contract the container is generic over
//! - [`error`] - [`ResourceError`] and [`AttributeError`]
//! - [`attributes`] - [`ReportAttributes`] parsed from observation queries
//!
//! ## Value Storage
//!
//! A value is an opaque byte payload of 1 to [`MAX_VALUE_LENGTH`] bytes. Encoding is the
//! caller's concern.

pub mod attributes;
pub mod entity;
pub mod error;

pub use attributes::ReportAttributes;
pub use entity::ResourceEntity;
pub use error::*;

use crate::base::{Base, BaseType, Mode, Operation};
use tracing::{debug, warn};

/// Largest payload a single resource value can carry.
pub const MAX_VALUE_LENGTH: usize = u8::MAX as usize;

/// A named, typed, permissioned value slot inside an object instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    base: Base,
    resource_type: String,
    multiple_instance: bool,
    value: Vec<u8>,
    report: Option<ReportAttributes>,
}

impl Resource {
    pub fn base(&self) -> &Base {
        &self.base
    }

    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    pub fn mode(&self) -> Mode {
        self.base.mode()
    }

    pub fn operation(&self) -> Operation {
        self.base.operation()
    }

    pub fn is_observable(&self) -> bool {
        self.base.is_observable()
    }

    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// Applies an observation attribute query to this resource's report attributes.
    ///
    /// The attributes are only replaced once the whole query has parsed.
    pub fn apply_observation_attribute(&mut self, query: &str) -> Result<(), AttributeError> {
        let current = self.report.as_ref().ok_or(AttributeError::NotObservable)?;
        let next = current.apply_query(query)?;
        debug!(resource = self.base.name(), ?next, "Attributes updated");
        self.report = Some(next);
        Ok(())
    }

    /// Current report attributes, present only while the resource is observable.
    pub fn report_attributes(&self) -> Option<&ReportAttributes> {
        self.report.as_ref()
    }
}

impl ResourceEntity for Resource {
    fn new(name: &str, resource_type: &str, mode: Mode, multiple_instance: bool) -> Self {
        Self {
            base: Base::new(name, mode, BaseType::Resource),
            resource_type: resource_type.to_string(),
            multiple_instance,
            value: Vec::new(),
            report: None,
        }
    }

    fn name(&self) -> &str {
        self.base.name()
    }

    fn instance_id(&self) -> u16 {
        self.base.instance_id()
    }

    fn set_instance_id(&mut self, instance_id: u16) {
        self.base.set_instance_id(instance_id);
    }

    fn set_operation(&mut self, operation: Operation) {
        self.base.set_operation(operation);
    }

    fn set_observable(&mut self, observable: bool) {
        self.base.set_observable(observable);
        if !observable {
            self.report = None;
        } else if self.report.is_none() {
            self.report = Some(ReportAttributes::default());
        }
    }

    fn set_value(&mut self, value: &[u8]) -> Result<(), ResourceError> {
        if value.is_empty() {
            return Err(ResourceError::EmptyValue);
        }
        if value.len() > MAX_VALUE_LENGTH {
            return Err(ResourceError::ValueTooLong {
                len: value.len(),
                max: MAX_VALUE_LENGTH,
            });
        }
        self.value.clear();
        self.value.extend_from_slice(value);
        Ok(())
    }

    fn supports_multiple_instances(&self) -> bool {
        self.multiple_instance
    }

    fn handle_observation_attribute(&mut self, query: &str) -> bool {
        match self.apply_observation_attribute(query) {
            Ok(()) => true,
            Err(e) => {
                warn!(resource = self.base.name(), query, error = %e, "Attribute rejected");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dynamic(name: &str) -> Resource {
        let mut res = Resource::new(name, "temperature", Mode::Dynamic, false);
        res.set_observable(true);
        res
    }

    #[test]
    fn set_value_stores_bytes() {
        let mut res = Resource::new("5700", "", Mode::Static, false);
        res.set_value(b"21.5").unwrap();
        assert_eq!(res.value(), b"21.5");
    }

    #[test]
    fn empty_value_is_rejected_and_keeps_previous() {
        let mut res = Resource::new("5700", "", Mode::Static, false);
        res.set_value(b"1").unwrap();
        assert_eq!(res.set_value(b""), Err(ResourceError::EmptyValue));
        assert_eq!(res.value(), b"1");
    }

    #[test]
    fn oversized_value_is_rejected() {
        let mut res = Resource::new("5700", "", Mode::Static, false);
        let payload = vec![0u8; MAX_VALUE_LENGTH + 1];
        assert_eq!(
            res.set_value(&payload),
            Err(ResourceError::ValueTooLong {
                len: MAX_VALUE_LENGTH + 1,
                max: MAX_VALUE_LENGTH,
            })
        );
        assert!(res.value().is_empty());
    }

    #[test]
    fn max_length_value_is_accepted() {
        let mut res = Resource::new("5700", "", Mode::Static, false);
        assert!(res.set_value(&vec![7u8; MAX_VALUE_LENGTH]).is_ok());
    }

    #[test]
    fn non_observable_resource_refuses_attributes() {
        let mut res = Resource::new("5700", "", Mode::Static, false);
        assert_eq!(
            res.apply_observation_attribute("pmin=1"),
            Err(AttributeError::NotObservable)
        );
        assert!(!res.handle_observation_attribute("pmin=1"));
        assert!(res.report_attributes().is_none());
    }

    #[test]
    fn observable_resource_applies_attributes() {
        let mut res = dynamic("5700");
        assert!(res.handle_observation_attribute("pmin=1&pmax=30"));
        let attrs = res.report_attributes().unwrap();
        assert_eq!(attrs.pmin, Some(1));
        assert_eq!(attrs.pmax, Some(30));
    }

    #[test]
    fn rejected_query_leaves_attributes_untouched() {
        let mut res = dynamic("5700");
        assert!(res.handle_observation_attribute("pmin=1"));
        assert!(!res.handle_observation_attribute("pmin=2&bogus=1"));
        assert_eq!(res.report_attributes().unwrap().pmin, Some(1));
    }

    #[test]
    fn disabling_observation_drops_attributes() {
        let mut res = dynamic("5700");
        res.handle_observation_attribute("pmax=10");
        res.set_observable(false);
        assert!(res.report_attributes().is_none());
        assert!(!res.is_observable());
    }
}
