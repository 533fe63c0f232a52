//! # M2M Object
//!
//! > **One node of an LWM2M-style device management tree.**
//!
//! Device management protocols such as LWM2M address data as `object/instance/resource`
//! (e.g. `3303/0/5700` is the current value of the first temperature sensor). This crate
//! models the middle level of that tree: an [`ObjectInstance`] that owns its resources.
//!
//! ## Core Concepts
//!
//! ### Ownership
//! An object instance exclusively owns its resources (`Vec<R>`). There's no shared or
//! reference-counted ownership: lookups return borrows, removal drops the resource, and
//! cloning the instance deep-copies every resource.
//!
//! ### Identity
//! A resource is identified by `(name, instance_id)`. Repeating a name creates another
//! instance of the same logical resource, with an id derived automatically. See
//! [`object_instance`] for the exact rule.
//!
//! ### Paths
//! Removing a resource tells the transport layer its path is gone, through a
//! [`PathNotifier`]. Paths are rendered by [`ResourcePath`].
//!
//! ## Module Tour
//!
//! - [`base`] - identity and metadata shared by every node ([`Base`], [`Operation`], [`Mode`])
//! - [`resource`] - the [`ResourceEntity`] contract and the bundled [`Resource`]
//! - [`object_instance`] - the [`ObjectInstance`] container
//! - [`notifier`] - [`PathNotifier`] and its [mock](notifier::mock)
//! - [`path`] - [`ResourcePath`] formatting
//! - [`tracing`] - log setup
//!
//! ## Concurrency
//!
//! Everything here is synchronous and single-threaded. If several threads share an object
//! instance, wrap it in a lock.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod base;
pub mod notifier;
pub mod object_instance;
pub mod path;
pub mod resource;
pub mod tracing;

// Re-export core types for convenience
pub use base::{Base, BaseType, Mode, Operation};
pub use notifier::{LoggingNotifier, PathNotifier};
pub use object_instance::ObjectInstance;
pub use path::ResourcePath;
pub use resource::{AttributeError, ReportAttributes, Resource, ResourceEntity, ResourceError};
