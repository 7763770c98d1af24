//! Ecovacs sensor descriptions

use std::sync::Arc;

use crate::capabilities::{CapabilitiesKind, CapabilityEvent, CapabilityType};
use crate::controller::Device;
use crate::entity::{
    EcovacsCapabilityEntityDescription, EcovacsDescriptionEntity, EcovacsEntity, EntityCategory,
};

/// Sensors every device type can provide, in platform order
pub static SENSOR_DESCRIPTIONS: &[EcovacsCapabilityEntityDescription<CapabilityEvent>] = &[
    EcovacsCapabilityEntityDescription {
        key: "battery",
        translation_key: None,
        entity_category: Some(EntityCategory::Diagnostic),
        entity_registry_enabled_default: true,
        device_capabilities: CapabilityType::Any,
        capability_fn: |caps| Some(caps.battery.clone()),
    },
    EcovacsCapabilityEntityDescription {
        key: "stats_area",
        translation_key: Some("stats_area"),
        entity_category: None,
        entity_registry_enabled_default: true,
        device_capabilities: CapabilityType::Any,
        capability_fn: |caps| caps.stats.as_ref().map(|stats| stats.clean.clone()),
    },
    EcovacsCapabilityEntityDescription {
        key: "total_stats_area",
        translation_key: Some("total_stats_area"),
        entity_category: None,
        entity_registry_enabled_default: true,
        device_capabilities: CapabilityType::Any,
        capability_fn: |caps| caps.stats.as_ref().map(|stats| stats.total.clone()),
    },
    EcovacsCapabilityEntityDescription {
        key: "network_ip",
        translation_key: Some("network_ip"),
        entity_category: Some(EntityCategory::Diagnostic),
        entity_registry_enabled_default: false,
        device_capabilities: CapabilityType::Any,
        capability_fn: |caps| Some(caps.network.clone()),
    },
    EcovacsCapabilityEntityDescription {
        key: "error",
        translation_key: Some("error"),
        entity_category: Some(EntityCategory::Diagnostic),
        entity_registry_enabled_default: false,
        device_capabilities: CapabilityType::Any,
        capability_fn: |caps| Some(caps.error.clone()),
    },
    EcovacsCapabilityEntityDescription {
        key: "life_span",
        translation_key: Some("life_span"),
        entity_category: Some(EntityCategory::Diagnostic),
        entity_registry_enabled_default: true,
        device_capabilities: CapabilityType::Kind(CapabilitiesKind::Vacuum),
        capability_fn: |caps| {
            caps.life_span
                .as_ref()
                .map(|life_span| CapabilityEvent::new(life_span.event))
        },
    },
];

/// Sensor entity
#[derive(Debug, Clone)]
pub struct EcovacsSensor {
    entity: EcovacsEntity<CapabilityEvent>,
    native_value: Option<serde_json::Value>,
}

impl EcovacsSensor {
    pub fn entity(&self) -> &EcovacsEntity<CapabilityEvent> {
        &self.entity
    }

    pub fn native_value(&self) -> Option<&serde_json::Value> {
        self.native_value.as_ref()
    }

    /// Store the latest value received for the sensor's event
    pub fn update(&mut self, value: serde_json::Value) {
        self.native_value = Some(value);
    }
}

impl EcovacsDescriptionEntity<CapabilityEvent> for EcovacsSensor {
    fn new(
        device: Arc<Device>,
        capability: CapabilityEvent,
        description: &EcovacsCapabilityEntityDescription<CapabilityEvent>,
    ) -> Self {
        Self {
            entity: EcovacsEntity::new(device, capability, description),
            native_value: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_are_unique() {
        let keys: HashSet<_> = SENSOR_DESCRIPTIONS.iter().map(|d| d.key).collect();
        assert_eq!(keys.len(), SENSOR_DESCRIPTIONS.len());
    }

    #[test]
    fn test_sensor_update() {
        let device = Arc::new(Device::new(
            crate::controller::DeviceInfo {
                did: "did1".to_string(),
                name: "E0001".to_string(),
                nick: None,
                model: None,
                class: "yna5x1".to_string(),
            },
            crate::capabilities::Capabilities::vacuum(),
        ));
        let description = &SENSOR_DESCRIPTIONS[0];
        let capability = description.capability_for(&device).unwrap();
        let mut sensor = EcovacsSensor::new(device, capability, description);
        assert!(sensor.native_value().is_none());

        sensor.update(serde_json::json!(87));
        assert_eq!(sensor.native_value(), Some(&serde_json::json!(87)));
        assert_eq!(sensor.entity().unique_id(), "did1_battery");
    }
}
