//! # Observability & Tracing
//!
//! Every public [`ObjectInstance`](crate::ObjectInstance) operation emits a `debug!` event
//! on entry. Additions and removals are logged at `info!` with the resulting list size,
//! and rejected values or attribute queries at `warn!`.
//!
//! ```bash
//! # Adds and removes only
//! RUST_LOG=info cargo run
//!
//! # Every operation, with its arguments
//! RUST_LOG=debug cargo run
//!
//! # Only this crate
//! RUST_LOG=m2m_object=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` the demo prints lines like:
//!
//! ```text
//! INFO Resource added object="3303" resource="5700" instance_id=0 size=1
//! INFO Resource removed object="3303" path=3303/0/5700/1 size=3
//! ```

/// Initializes the tracing subscriber, filtered by the `RUST_LOG` environment variable.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // object/resource fields already say where an event came from
        .compact()
        .init();
}
