//! # M2M Object Demo
//!
//! Builds the first instance of the IPSO temperature object (`3303/0`), gives it a few
//! resources, applies observation attributes and removes one resource again.

use m2m_object::tracing::setup_tracing;
use m2m_object::{LoggingNotifier, ObjectInstance, ResourceEntity};
use tracing::{info, warn};

fn main() {
    setup_tracing();

    info!("Starting object instance demo");

    let mut sensor: ObjectInstance = ObjectInstance::new("3303");
    sensor.set_path_notifier(Box::new(LoggingNotifier));

    if sensor
        .create_static_resource("5701", "Sensor Units", b"Cel", false)
        .is_none()
    {
        warn!("Units resource could not be created");
    }

    // Two channels of the same sensor value
    for reading in [b"21.5".as_slice(), b"22.0".as_slice()] {
        let value = sensor.create_dynamic_resource("5700", "Sensor Value", true, true);
        if let Err(e) = value.set_value(reading) {
            warn!(error = %e, "Reading rejected");
        }
    }

    let accepted = sensor.handle_observation_attribute("pmin=10&pmax=60");
    info!(
        accepted,
        channels = sensor.resource_count_by_name("5700"),
        total = sensor.resource_count(),
        "Attributes applied"
    );

    let removed = sensor.remove_resource("5700", 1);
    info!(removed, total = sensor.resource_count(), "Demo completed");
}
