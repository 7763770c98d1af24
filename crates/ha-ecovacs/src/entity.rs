//! Capability-driven entity descriptions
//!
//! Platforms describe each entity they can offer with an
//! [`EcovacsCapabilityEntityDescription`]: the capability set type it applies
//! to and a function extracting the capability it is built on.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::capabilities::{Capabilities, CapabilityType};
use crate::controller::Device;

/// Category of an entity that is not a primary control or sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityCategory {
    Config,
    Diagnostic,
}

/// Static description of an entity backed by a capability of type `C`
pub struct EcovacsCapabilityEntityDescription<C> {
    /// Key unique within the platform
    pub key: &'static str,
    pub translation_key: Option<&'static str>,
    pub entity_category: Option<EntityCategory>,
    pub entity_registry_enabled_default: bool,
    /// Capability set type the description applies to
    pub device_capabilities: CapabilityType,
    /// Extracts the capability, `None` when the device does not support it
    pub capability_fn: fn(&Capabilities) -> Option<C>,
}

impl<C> EcovacsCapabilityEntityDescription<C> {
    /// Extract this description's capability from a device, if it applies
    pub fn capability_for(&self, device: &Device) -> Option<C> {
        let capabilities = device.capabilities();
        if !self.device_capabilities.matches(capabilities) {
            return None;
        }
        (self.capability_fn)(capabilities)
    }
}

// Implemented by hand so `C` needs no `Clone`/`Debug` bound.
impl<C> Clone for EcovacsCapabilityEntityDescription<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for EcovacsCapabilityEntityDescription<C> {}

impl<C> fmt::Debug for EcovacsCapabilityEntityDescription<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EcovacsCapabilityEntityDescription")
            .field("key", &self.key)
            .field("translation_key", &self.translation_key)
            .field("entity_category", &self.entity_category)
            .field(
                "entity_registry_enabled_default",
                &self.entity_registry_enabled_default,
            )
            .field("device_capabilities", &self.device_capabilities)
            .finish_non_exhaustive()
    }
}

/// Entity type that can be built from a (device, capability, description) triple
pub trait EcovacsDescriptionEntity<C>: Sized {
    fn new(
        device: Arc<Device>,
        capability: C,
        description: &EcovacsCapabilityEntityDescription<C>,
    ) -> Self;
}

/// Generic Ecovacs entity
#[derive(Debug, Clone)]
pub struct EcovacsEntity<C> {
    device: Arc<Device>,
    capability: C,
    description: EcovacsCapabilityEntityDescription<C>,
}

impl<C> EcovacsEntity<C> {
    pub fn device(&self) -> &Arc<Device> {
        &self.device
    }

    pub fn capability(&self) -> &C {
        &self.capability
    }

    pub fn description(&self) -> &EcovacsCapabilityEntityDescription<C> {
        &self.description
    }

    /// Unique id: `{did}_{key}`
    pub fn unique_id(&self) -> String {
        format!("{}_{}", self.device.info().did, self.description.key)
    }

    /// Translation key, falling back to the description key
    pub fn translation_key(&self) -> &'static str {
        self.description
            .translation_key
            .unwrap_or(self.description.key)
    }

    pub fn entity_category(&self) -> Option<EntityCategory> {
        self.description.entity_category
    }

    pub fn enabled_by_default(&self) -> bool {
        self.description.entity_registry_enabled_default
    }
}

impl<C> EcovacsDescriptionEntity<C> for EcovacsEntity<C> {
    fn new(
        device: Arc<Device>,
        capability: C,
        description: &EcovacsCapabilityEntityDescription<C>,
    ) -> Self {
        Self {
            device,
            capability,
            description: *description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::{CapabilitiesKind, CapabilityEvent, CapabilitySet};
    use crate::controller::DeviceInfo;

    fn device(capabilities: Capabilities) -> Arc<Device> {
        Arc::new(Device::new(
            DeviceInfo {
                did: "did1".to_string(),
                name: "E0001".to_string(),
                nick: None,
                model: None,
                class: "yna5x1".to_string(),
            },
            capabilities,
        ))
    }

    const BATTERY: EcovacsCapabilityEntityDescription<CapabilityEvent> =
        EcovacsCapabilityEntityDescription {
            key: "battery",
            translation_key: None,
            entity_category: Some(EntityCategory::Diagnostic),
            entity_registry_enabled_default: true,
            device_capabilities: CapabilityType::Any,
            capability_fn: |caps| Some(caps.battery.clone()),
        };

    const CUT_DIRECTION: EcovacsCapabilityEntityDescription<CapabilitySet> =
        EcovacsCapabilityEntityDescription {
            key: "cut_direction",
            translation_key: Some("cut_direction"),
            entity_category: Some(EntityCategory::Config),
            entity_registry_enabled_default: false,
            device_capabilities: CapabilityType::Kind(CapabilitiesKind::Mower),
            capability_fn: |caps| caps.cut_direction.clone(),
        };

    #[test]
    fn test_capability_for_checks_type_then_fn() {
        let vacuum = device(Capabilities::vacuum().with_cut_direction());
        let mower = device(Capabilities::mower());
        let mower_with = device(Capabilities::mower().with_cut_direction());

        assert!(CUT_DIRECTION.capability_for(&vacuum).is_none());
        assert!(CUT_DIRECTION.capability_for(&mower).is_none());
        assert!(CUT_DIRECTION.capability_for(&mower_with).is_some());
        assert!(BATTERY.capability_for(&vacuum).is_some());
    }

    #[test]
    fn test_entity_identity() {
        let dev = device(Capabilities::vacuum());
        let capability = BATTERY.capability_for(&dev).unwrap();
        let entity = EcovacsEntity::new(Arc::clone(&dev), capability, &BATTERY);

        assert_eq!(entity.unique_id(), "did1_battery");
        assert_eq!(entity.translation_key(), "battery");
        assert_eq!(entity.entity_category(), Some(EntityCategory::Diagnostic));
        assert!(entity.enabled_by_default());
        assert!(Arc::ptr_eq(entity.device(), &dev));
    }
}
