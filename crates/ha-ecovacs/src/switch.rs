//! Ecovacs switch descriptions

use std::sync::Arc;

use crate::capabilities::{CapabilitiesKind, CapabilitySet, CapabilityType};
use crate::controller::Device;
use crate::entity::{
    EcovacsCapabilityEntityDescription, EcovacsDescriptionEntity, EcovacsEntity, EntityCategory,
};

/// Configuration switches, in platform order
pub static SWITCH_DESCRIPTIONS: &[EcovacsCapabilityEntityDescription<CapabilitySet>] = &[
    EcovacsCapabilityEntityDescription {
        key: "advanced_mode",
        translation_key: Some("advanced_mode"),
        entity_category: Some(EntityCategory::Config),
        entity_registry_enabled_default: false,
        device_capabilities: CapabilityType::Kind(CapabilitiesKind::Vacuum),
        capability_fn: |caps| caps.advanced_mode.clone(),
    },
    EcovacsCapabilityEntityDescription {
        key: "continuous_cleaning",
        translation_key: Some("continuous_cleaning"),
        entity_category: Some(EntityCategory::Config),
        entity_registry_enabled_default: false,
        device_capabilities: CapabilityType::Kind(CapabilitiesKind::Vacuum),
        capability_fn: |caps| caps.continuous_cleaning.clone(),
    },
    EcovacsCapabilityEntityDescription {
        key: "carpet_auto_fan_boost",
        translation_key: Some("carpet_auto_fan_boost"),
        entity_category: Some(EntityCategory::Config),
        entity_registry_enabled_default: false,
        device_capabilities: CapabilityType::Kind(CapabilitiesKind::Vacuum),
        capability_fn: |caps| caps.carpet_auto_fan_boost.clone(),
    },
    EcovacsCapabilityEntityDescription {
        key: "true_detect",
        translation_key: Some("true_detect"),
        entity_category: Some(EntityCategory::Config),
        entity_registry_enabled_default: false,
        device_capabilities: CapabilityType::Any,
        capability_fn: |caps| caps.true_detect.clone(),
    },
    EcovacsCapabilityEntityDescription {
        key: "border_switch",
        translation_key: Some("border_switch"),
        entity_category: Some(EntityCategory::Config),
        entity_registry_enabled_default: false,
        device_capabilities: CapabilityType::Kind(CapabilitiesKind::Mower),
        capability_fn: |caps| caps.border_switch.clone(),
    },
    EcovacsCapabilityEntityDescription {
        key: "cut_direction",
        translation_key: Some("cut_direction"),
        entity_category: Some(EntityCategory::Config),
        entity_registry_enabled_default: false,
        device_capabilities: CapabilityType::Kind(CapabilitiesKind::Mower),
        capability_fn: |caps| caps.cut_direction.clone(),
    },
];

/// Switch entity
#[derive(Debug, Clone)]
pub struct EcovacsSwitch {
    entity: EcovacsEntity<CapabilitySet>,
    is_on: Option<bool>,
}

impl EcovacsSwitch {
    pub fn entity(&self) -> &EcovacsEntity<CapabilitySet> {
        &self.entity
    }

    /// Last reported state, `None` until the device reports one
    pub fn is_on(&self) -> Option<bool> {
        self.is_on
    }

    pub fn set_state(&mut self, on: bool) {
        self.is_on = Some(on);
    }
}

impl EcovacsDescriptionEntity<CapabilitySet> for EcovacsSwitch {
    fn new(
        device: Arc<Device>,
        capability: CapabilitySet,
        description: &EcovacsCapabilityEntityDescription<CapabilitySet>,
    ) -> Self {
        Self {
            entity: EcovacsEntity::new(device, capability, description),
            is_on: None,
        }
    }
}
