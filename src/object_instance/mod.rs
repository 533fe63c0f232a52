//! # Object Instance
//!
//! An [`ObjectInstance`] is one addressable node of the object tree (e.g. `3303/0`, the
//! first temperature sensor). It exclusively owns an ordered list of resources and is the
//! only way to add or remove them.
//!
//! ## Identity
//!
//! Resources are identified by `(name, instance_id)`. When a resource is added under a
//! name that already exists, it gets the instance id of the *first* same-named resource
//! plus one. A resource with a new name keeps instance id 0. The list is scanned in
//! insertion order, so ids are derived locally rather than being a global maximum.
//!
//! Because only the first same-named entry is consulted, two resources can end up with
//! the same `(name, instance_id)` (three adds of one name give ids 0, 1, 1). Lookup and
//! removal always act on the first match in insertion order.
//!
//! ## Ownership
//!
//! - Lookups hand out borrows bounded by the instance's own lifetime.
//! - Cloning deep-copies every resource, in order. The clone has no path notifier.
//! - Dropping the instance drops every resource exactly once.
//!
//! ## Usage
//!
//! ```rust
//! use m2m_object::{ObjectInstance, ResourceEntity};
//!
//! let mut instance: ObjectInstance = ObjectInstance::new("3303");
//! instance.create_dynamic_resource("5700", "temperature", true, false);
//! let second = instance.create_dynamic_resource("5700", "temperature", true, false);
//! assert_eq!(second.instance_id(), 1);
//! assert_eq!(instance.resource_count_by_name("5700"), 2);
//! ```

use crate::base::{Base, BaseType, Mode, Operation};
use crate::notifier::PathNotifier;
use crate::path::ResourcePath;
use crate::resource::{Resource, ResourceEntity};
use std::fmt::Debug;
use tracing::{debug, info, warn};

/// A container node owning the resources of one object instance.
///
/// Generic over the resource type so the same identity rules apply to any
/// [`ResourceEntity`]; the bundled [`Resource`] is the default.
pub struct ObjectInstance<R: ResourceEntity = Resource> {
    base: Base,
    resources: Vec<R>,
    notifier: Option<Box<dyn PathNotifier>>,
}

impl<R: ResourceEntity> ObjectInstance<R> {
    /// Creates an empty object instance with instance id 0.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: Base::new(name, Mode::Dynamic, BaseType::ObjectInstance),
            resources: Vec::new(),
            notifier: None,
        }
    }

    pub fn name(&self) -> &str {
        self.base.name()
    }

    pub fn instance_id(&self) -> u16 {
        self.base.instance_id()
    }

    pub fn set_instance_id(&mut self, instance_id: u16) {
        self.base.set_instance_id(instance_id);
    }

    pub fn base(&self) -> &Base {
        &self.base
    }

    /// Always [`BaseType::ObjectInstance`].
    pub fn base_type(&self) -> BaseType {
        self.base.base_type()
    }

    /// Attaches the collaborator told about removed resource paths.
    pub fn set_path_notifier(&mut self, notifier: Box<dyn PathNotifier>) {
        self.notifier = Some(notifier);
    }

    /// Creates a read-only, non-observable resource holding `value`.
    ///
    /// Returns `None` if the value can't be stored; the resource is then discarded and
    /// never added.
    pub fn create_static_resource(
        &mut self,
        name: &str,
        resource_type: &str,
        value: &[u8],
        multiple_instance: bool,
    ) -> Option<&mut R> {
        debug!(object = self.base.name(), resource = name, len = value.len(), "create_static_resource");
        let mut resource = R::new(name, resource_type, Mode::Static, multiple_instance);
        resource.set_operation(Operation::GetAllowed);
        resource.set_observable(false);

        if let Err(e) = resource.set_value(value) {
            warn!(object = self.base.name(), resource = name, error = %e, "Static resource not created");
            return None;
        }
        Some(self.add_resource(resource))
    }

    /// Creates a readable and writable resource.
    pub fn create_dynamic_resource(
        &mut self,
        name: &str,
        resource_type: &str,
        observable: bool,
        multiple_instance: bool,
    ) -> &mut R {
        debug!(object = self.base.name(), resource = name, observable, "create_dynamic_resource");
        let mut resource = R::new(name, resource_type, Mode::Dynamic, multiple_instance);
        resource.set_operation(Operation::GetPutAllowed);
        resource.set_observable(observable);
        self.add_resource(resource)
    }

    /// Removes the resource matching `name` and `instance_id`.
    ///
    /// The resource's path is handed to the path notifier (if any) before the resource is
    /// dropped. Returns `false`, with no side effects, when nothing matches.
    pub fn remove_resource(&mut self, name: &str, instance_id: u16) -> bool {
        debug!(object = self.base.name(), resource = name, instance_id, "remove_resource");
        let Some(pos) = self.position(name, instance_id) else {
            debug!(object = self.base.name(), resource = name, instance_id, "Not found");
            return false;
        };

        let path = self.path_of(&self.resources[pos]).to_string();
        match self.notifier.as_mut() {
            Some(notifier) => notifier.unregister_path(&path),
            None => debug!(%path, "No path notifier attached"),
        }

        self.resources.remove(pos);
        info!(object = self.base.name(), %path, size = self.resources.len(), "Resource removed");
        true
    }

    /// Looks up a resource by name and instance id.
    pub fn resource(&self, name: &str, instance_id: u16) -> Option<&R> {
        debug!(object = self.base.name(), resource = name, instance_id, "resource");
        self.resources
            .iter()
            .find(|r| r.name() == name && r.instance_id() == instance_id)
    }

    /// Mutable lookup; the borrow can't outlive this instance.
    pub fn resource_mut(&mut self, name: &str, instance_id: u16) -> Option<&mut R> {
        debug!(object = self.base.name(), resource = name, instance_id, "resource_mut");
        self.resources
            .iter_mut()
            .find(|r| r.name() == name && r.instance_id() == instance_id)
    }

    /// All owned resources in insertion order.
    pub fn resources(&self) -> &[R] {
        debug!(object = self.base.name(), size = self.resources.len(), "resources");
        &self.resources
    }

    pub fn resource_count(&self) -> usize {
        debug!(object = self.base.name(), "resource_count");
        self.resources.len()
    }

    /// Number of instances of the resource called `name`.
    pub fn resource_count_by_name(&self, name: &str) -> usize {
        debug!(object = self.base.name(), resource = name, "resource_count_by_name");
        self.resources.iter().filter(|r| r.name() == name).count()
    }

    /// External path of the resource matching `name` and `instance_id`.
    pub fn resource_path(&self, name: &str, instance_id: u16) -> Option<ResourcePath> {
        debug!(object = self.base.name(), resource = name, instance_id, "resource_path");
        self.position(name, instance_id)
            .map(|pos| self.path_of(&self.resources[pos]))
    }

    /// Forwards an observation attribute query to every resource, in order.
    ///
    /// Every resource sees the query. The result is whatever the last resource returned,
    /// not a combination of all results; an empty instance returns `false`.
    pub fn handle_observation_attribute(&mut self, query: &str) -> bool {
        debug!(object = self.base.name(), query, "handle_observation_attribute");
        let mut success = false;
        for resource in self.resources.iter_mut() {
            success = resource.handle_observation_attribute(query);
        }
        success
    }

    fn add_resource(&mut self, mut resource: R) -> &mut R {
        if let Some(existing) = self.resources.iter().find(|r| r.name() == resource.name()) {
            // u16 ids wrap like the addressing scheme's 16-bit space
            resource.set_instance_id(existing.instance_id().wrapping_add(1));
        }

        let index = self.resources.len();
        self.resources.push(resource);
        let added = &mut self.resources[index];
        info!(
            object = self.base.name(),
            resource = added.name(),
            instance_id = added.instance_id(),
            size = index + 1,
            "Resource added"
        );
        added
    }

    fn position(&self, name: &str, instance_id: u16) -> Option<usize> {
        self.resources
            .iter()
            .position(|r| r.name() == name && r.instance_id() == instance_id)
    }

    fn path_of(&self, resource: &R) -> ResourcePath {
        ResourcePath {
            object_name: self.base.name().to_string(),
            object_instance_id: self.base.instance_id(),
            resource_name: resource.name().to_string(),
            resource_instance_id: resource
                .supports_multiple_instances()
                .then(|| resource.instance_id()),
        }
    }
}

impl<R: ResourceEntity> Clone for ObjectInstance<R> {
    /// Deep-copies the identity and every resource. Path registration is not carried over.
    fn clone(&self) -> Self {
        debug!(object = self.base.name(), size = self.resources.len(), "Cloning object instance");
        Self {
            base: self.base.clone(),
            resources: self.resources.clone(),
            notifier: None,
        }
    }

    /// Replaces this instance's identity and resources with copies of `source`'s.
    /// The target keeps its own path notifier.
    fn clone_from(&mut self, source: &Self) {
        debug!(object = source.base.name(), size = source.resources.len(), "Assigning object instance");
        self.base.clone_from(&source.base);
        self.resources.clone_from(&source.resources);
    }
}

impl<R: ResourceEntity> Drop for ObjectInstance<R> {
    fn drop(&mut self) {
        debug!(object = self.base.name(), size = self.resources.len(), "Dropping object instance");
        self.resources.clear();
    }
}

impl<R: ResourceEntity + Debug> Debug for ObjectInstance<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectInstance")
            .field("base", &self.base)
            .field("resources", &self.resources)
            .field("has_notifier", &self.notifier.is_some())
            .finish()
    }
}
