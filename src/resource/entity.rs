//! # ResourceEntity Trait
//!
//! The `ResourceEntity` trait defines the contract every child of an
//! [`ObjectInstance`](crate::ObjectInstance) must satisfy. The container only ever talks to
//! its children through this trait, so the same ownership and identity logic works for the
//! bundled [`Resource`](super::Resource) and for any other resource type (test doubles
//! included).
//!
//! # Architecture Note
//! The container owns its children outright (`Vec<R>`), so `Clone` is part of the contract:
//! copying an object instance deep-copies every child instead of aliasing it.

use super::error::ResourceError;
use crate::base::{Mode, Operation};

/// Contract for a resource owned by an object instance.
pub trait ResourceEntity: Clone {
    /// Constructs a resource with instance id 0.
    fn new(name: &str, resource_type: &str, mode: Mode, multiple_instance: bool) -> Self;

    fn name(&self) -> &str;

    fn instance_id(&self) -> u16;

    fn set_instance_id(&mut self, instance_id: u16);

    fn set_operation(&mut self, operation: Operation);

    fn set_observable(&mut self, observable: bool);

    /// Stores a value payload.
    ///
    /// On error the previously stored value is kept.
    fn set_value(&mut self, value: &[u8]) -> Result<(), ResourceError>;

    /// Whether this resource is addressed with a resource-instance path segment.
    fn supports_multiple_instances(&self) -> bool;

    /// Applies an observation attribute query (e.g. `pmin=10&pmax=60`).
    ///
    /// Returns `false` if the query was rejected.
    fn handle_observation_attribute(&mut self, query: &str) -> bool;
}
