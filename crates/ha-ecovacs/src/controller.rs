//! Ecovacs controller
//!
//! The controller owns the devices of one config entry. Devices are handed
//! out as `Arc<Device>` so entities can keep a reference without copying the
//! capability set.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

use crate::capabilities::{Capabilities, CapabilityType};
use crate::config::EcovacsConfig;
use crate::util::get_client_device_id;

/// Device details as reported by the Ecovacs API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInfo {
    /// Device id
    pub did: String,
    /// Serial-style device name
    pub name: String,
    /// User-assigned nickname
    #[serde(default)]
    pub nick: Option<String>,
    /// Product model name
    #[serde(default)]
    pub model: Option<String>,
    /// Ecovacs device class code
    pub class: String,
}

/// A device known to the controller
#[derive(Debug)]
pub struct Device {
    info: DeviceInfo,
    capabilities: Capabilities,
}

impl Device {
    pub fn new(info: DeviceInfo, capabilities: Capabilities) -> Self {
        Self { info, capabilities }
    }

    pub fn info(&self) -> &DeviceInfo {
        &self.info
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    /// Name shown in the UI: the nickname if set, the device name otherwise
    pub fn display_name(&self) -> &str {
        self.info.nick.as_deref().unwrap_or(&self.info.name)
    }
}

/// Controller for the devices of one Ecovacs account
#[derive(Debug)]
pub struct EcovacsController {
    config: EcovacsConfig,
    device_id: String,
    devices: Vec<Arc<Device>>,
}

impl EcovacsController {
    /// Create a controller, deriving the client device id from the config
    pub fn new(config: EcovacsConfig, location_name: &str) -> Self {
        let device_id = get_client_device_id(location_name, config.is_self_hosted());
        info!(
            "Created Ecovacs controller (country: {}, mode: {:?})",
            config.country, config.mode
        );
        Self {
            config,
            device_id,
            devices: Vec::new(),
        }
    }

    pub fn config(&self) -> &EcovacsConfig {
        &self.config
    }

    /// Client device id used when authenticating
    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    /// Register a device
    pub fn add_device(&mut self, device: Device) -> Arc<Device> {
        debug!(
            "Adding Ecovacs device {} ({})",
            device.info.did,
            device.capabilities.kind()
        );
        let device = Arc::new(device);
        self.devices.push(Arc::clone(&device));
        device
    }

    /// Devices whose capability set is of the given type, in registration order
    pub fn devices(&self, capability_type: CapabilityType) -> impl Iterator<Item = &Arc<Device>> {
        self.devices
            .iter()
            .filter(move |device| capability_type.matches(&device.capabilities))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::CapabilitiesKind;
    use crate::config::InstanceMode;

    fn config(mode: InstanceMode) -> EcovacsConfig {
        EcovacsConfig {
            username: "user".to_string(),
            password: "secret".to_string(),
            country: "de".to_string(),
            mode,
            override_rest_url: None,
            override_mqtt_url: None,
            verify_mqtt_certificate: true,
        }
    }

    fn info(did: &str) -> DeviceInfo {
        DeviceInfo {
            did: did.to_string(),
            name: format!("E{did}"),
            nick: None,
            model: None,
            class: "yna5x1".to_string(),
        }
    }

    #[test]
    fn test_self_hosted_device_id() {
        let controller = EcovacsController::new(config(InstanceMode::SelfHosted), "My Home");
        assert_eq!(controller.device_id(), "HA-my_home");
    }

    #[test]
    fn test_cloud_device_id() {
        let controller = EcovacsController::new(config(InstanceMode::Cloud), "My Home");
        assert_eq!(controller.device_id().len(), 8);
    }

    #[test]
    fn test_devices_filtered_by_type() {
        let mut controller = EcovacsController::new(config(InstanceMode::Cloud), "Home");
        controller.add_device(Device::new(info("1"), Capabilities::vacuum()));
        controller.add_device(Device::new(info("2"), Capabilities::mower()));
        controller.add_device(Device::new(info("3"), Capabilities::vacuum()));

        let all: Vec<_> = controller
            .devices(CapabilityType::Any)
            .map(|d| d.info().did.as_str())
            .collect();
        assert_eq!(all, vec!["1", "2", "3"]);

        let vacuums: Vec<_> = controller
            .devices(CapabilitiesKind::Vacuum.into())
            .map(|d| d.info().did.as_str())
            .collect();
        assert_eq!(vacuums, vec!["1", "3"]);
    }

    #[test]
    fn test_display_name() {
        let mut with_nick = info("1");
        with_nick.nick = Some("Kitchen bot".to_string());
        assert_eq!(
            Device::new(with_nick, Capabilities::vacuum()).display_name(),
            "Kitchen bot"
        );
        assert_eq!(
            Device::new(info("2"), Capabilities::vacuum()).display_name(),
            "E2"
        );
    }
}
