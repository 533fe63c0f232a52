//! # Mock Notifier
//!
//! `MockNotifier` stands in for the transport registry in tests. It records every path it
//! is asked to unregister and, optionally, checks those paths against an ordered list of
//! expectations.
//!
//! ## Usage
//!
//! ```rust
//! use m2m_object::notifier::mock::MockNotifier;
//! use m2m_object::ObjectInstance;
//!
//! let mut mock = MockNotifier::new();
//! mock.expect_unregister("3303/0/5700");
//!
//! let mut instance: ObjectInstance = ObjectInstance::new("3303");
//! instance.set_path_notifier(mock.notifier());
//! instance.create_dynamic_resource("5700", "temperature", true, false);
//! assert!(instance.remove_resource("5700", 0));
//!
//! mock.verify();
//! assert_eq!(mock.history(), vec!["3303/0/5700".to_string()]);
//! ```
//!
//! The handle returned by [`MockNotifier::notifier`] shares state with the mock, so the
//! object instance can own it while the test keeps inspecting the mock.

use super::PathNotifier;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct MockState {
    expectations: VecDeque<String>,
    history: Vec<String>,
}

/// A path notifier test double with expectation tracking.
#[derive(Debug, Default)]
pub struct MockNotifier {
    state: Arc<Mutex<MockState>>,
}

impl MockNotifier {
    /// Creates a mock with no expectations and an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a notifier handle backed by this mock.
    pub fn notifier(&self) -> Box<dyn PathNotifier> {
        Box::new(MockHandle {
            state: self.state.clone(),
        })
    }

    /// Expects the next unregistration to be for `path`.
    pub fn expect_unregister(&mut self, path: impl Into<String>) {
        let mut state = self.state.lock().unwrap();
        state.expectations.push_back(path.into());
    }

    /// Every path unregistered so far, in call order.
    pub fn history(&self) -> Vec<String> {
        self.state.lock().unwrap().history.clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let state = self.state.lock().unwrap();
        if !state.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                state.expectations.len()
            );
        }
    }
}

struct MockHandle {
    state: Arc<Mutex<MockState>>,
}

impl PathNotifier for MockHandle {
    fn unregister_path(&mut self, path: &str) {
        let mut state = self.state.lock().unwrap();
        if let Some(expected) = state.expectations.pop_front() {
            if expected != path {
                panic!("Unexpected unregister: expected {expected}, got {path}");
            }
        }
        state.history.push(path.to_string());
    }
}
