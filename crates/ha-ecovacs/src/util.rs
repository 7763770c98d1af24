//! Ecovacs helper functions

use rand::distributions::Uniform;
use rand::Rng;
use std::sync::Arc;
use tracing::debug;

use crate::capabilities::CapabilityType;
use crate::controller::EcovacsController;
use crate::entity::{EcovacsCapabilityEntityDescription, EcovacsDescriptionEntity};

const CLIENT_DEVICE_ID_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const CLIENT_DEVICE_ID_LENGTH: usize = 8;

/// Get the client device id used to log into the Ecovacs servers
///
/// Self-hosted servers get a stable id derived from the location name. The
/// cloud gets a fresh random id on every call; callers that need a stable id
/// must store it.
pub fn get_client_device_id(location_name: &str, self_hosted: bool) -> String {
    if self_hosted {
        return format!("HA-{}", ha_core::slugify(location_name));
    }

    let charset = Uniform::from(0..CLIENT_DEVICE_ID_CHARSET.len());
    rand::thread_rng()
        .sample_iter(charset)
        .take(CLIENT_DEVICE_ID_LENGTH)
        .map(|i| CLIENT_DEVICE_ID_CHARSET[i] as char)
        .collect()
}

/// Return all supported entities for all devices
///
/// Yields one entity per (device, description) pair where the device's
/// capability set matches the description's capability type and the
/// description's capability function returns a capability. Devices are
/// iterated in controller order, descriptions in slice order.
pub fn get_supported_entities<C, E>(
    controller: &EcovacsController,
    descriptions: &[EcovacsCapabilityEntityDescription<C>],
) -> Vec<E>
where
    E: EcovacsDescriptionEntity<C>,
{
    let entities: Vec<E> = controller
        .devices(CapabilityType::Any)
        .flat_map(|device| {
            descriptions.iter().filter_map(move |description| {
                let capability = description.capability_for(device)?;
                Some(E::new(Arc::clone(device), capability, description))
            })
        })
        .collect();

    debug!(
        "Resolved {} supported entities from {} descriptions",
        entities.len(),
        descriptions.len()
    );
    entities
}
