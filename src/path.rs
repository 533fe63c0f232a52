//! External addressing of resources.
//!
//! A resource is addressed as `object/object_instance/resource`, with a trailing
//! `/resource_instance` segment only when the resource supports multiple instances.
//! Ids are rendered in plain decimal.

use std::fmt::Display;

/// Fully-qualified path of a resource inside the object tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourcePath {
    pub object_name: String,
    pub object_instance_id: u16,
    pub resource_name: String,
    pub resource_instance_id: Option<u16>,
}

impl Display for ResourcePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{}/{}",
            self.object_name, self.object_instance_id, self.resource_name
        )?;
        if let Some(id) = self.resource_instance_id {
            write!(f, "/{}", id)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_instance_path_has_three_segments() {
        let path = ResourcePath {
            object_name: "3303".into(),
            object_instance_id: 0,
            resource_name: "5700".into(),
            resource_instance_id: None,
        };
        assert_eq!(path.to_string(), "3303/0/5700");
    }

    #[test]
    fn multiple_instance_path_appends_resource_instance() {
        let path = ResourcePath {
            object_name: "3303".into(),
            object_instance_id: 12,
            resource_name: "5700".into(),
            resource_instance_id: Some(65535),
        };
        assert_eq!(path.to_string(), "3303/12/5700/65535");
    }
}
