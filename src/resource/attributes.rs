//! Observation (notification) attributes attached to an observable resource.
//!
//! A query such as `pmin=10&pmax=60&gt=25.5` is applied to a copy of the current
//! attributes and only committed once every token has parsed.

use super::error::AttributeError;
use serde::{Deserialize, Serialize};

const PMIN: &str = "pmin";
const PMAX: &str = "pmax";
const GT: &str = "gt";
const LT: &str = "lt";
const ST: &str = "st";
const CANCEL: &str = "cancel";

/// Report attributes controlling when notifications for a resource are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportAttributes {
    /// Minimum period between notifications, in seconds.
    pub pmin: Option<u32>,
    /// Maximum period between notifications, in seconds.
    pub pmax: Option<u32>,
    /// Notify when the value rises above this threshold.
    pub greater_than: Option<f32>,
    /// Notify when the value falls below this threshold.
    pub less_than: Option<f32>,
    /// Notify when the value changes by at least this step.
    pub step: Option<f32>,
    pub cancelled: bool,
}

impl ReportAttributes {
    /// Applies an `&`-separated attribute query, returning the updated attributes.
    ///
    /// `self` is left untouched; callers commit the returned value.
    pub fn apply_query(&self, query: &str) -> Result<Self, AttributeError> {
        let mut next = self.clone();

        for token in query.split('&').filter(|t| !t.is_empty()) {
            let (name, value) = match token.split_once('=') {
                Some((name, value)) => (name, Some(value)),
                None => (token, None),
            };

            match name {
                PMIN => next.pmin = Some(parse_value(name, value)?),
                PMAX => next.pmax = Some(parse_value(name, value)?),
                GT => next.greater_than = Some(parse_value(name, value)?),
                LT => next.less_than = Some(parse_value(name, value)?),
                ST => next.step = Some(parse_value(name, value)?),
                CANCEL => next.cancelled = true,
                other => return Err(AttributeError::UnknownAttribute(other.to_string())),
            }
        }

        if let (Some(pmin), Some(pmax)) = (next.pmin, next.pmax) {
            if pmin > pmax {
                return Err(AttributeError::PeriodRange { pmin, pmax });
            }
        }

        Ok(next)
    }
}

fn parse_value<V: std::str::FromStr>(name: &str, value: Option<&str>) -> Result<V, AttributeError> {
    let raw = value.unwrap_or_default();
    raw.parse().map_err(|_| AttributeError::InvalidValue {
        name: name.to_string(),
        value: raw.to_string(),
    })
}
