//! Ecovacs integration helpers
//!
//! Devices reported by the Ecovacs controller expose a tagged capability set.
//! Platforms declare the entities they can provide as static
//! [`EcovacsCapabilityEntityDescription`] tables, and
//! [`get_supported_entities`] matches those tables against every known device.
//!
//! # Example
//!
//! ```ignore
//! use ha_ecovacs::{get_supported_entities, sensor, EcovacsController};
//!
//! let controller = EcovacsController::new(config, "Home");
//! let sensors: Vec<sensor::EcovacsSensor> =
//!     get_supported_entities(&controller, sensor::SENSOR_DESCRIPTIONS);
//! ```

pub mod capabilities;
pub mod config;
pub mod controller;
pub mod entity;
pub mod error;
pub mod sensor;
pub mod switch;
pub mod util;

pub use capabilities::{
    Capabilities, CapabilitiesKind, CapabilityEvent, CapabilityLifeSpan, CapabilitySet,
    CapabilitySetTypes, CapabilityStats, CapabilityType, Event, LifeSpan,
};
pub use config::{EcovacsConfig, InstanceMode};
pub use controller::{Device, DeviceInfo, EcovacsController};
pub use entity::{
    EcovacsCapabilityEntityDescription, EcovacsDescriptionEntity, EcovacsEntity, EntityCategory,
};
pub use error::{EcovacsError, EcovacsResult};
pub use util::{get_client_device_id, get_supported_entities};

/// Integration domain
pub const DOMAIN: &str = "ecovacs";
