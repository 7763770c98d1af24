//! Ecovacs config entry data

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{EcovacsError, EcovacsResult};

/// Where the Ecovacs servers live
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstanceMode {
    /// Official Ecovacs cloud
    #[default]
    Cloud,
    /// Self-hosted server such as Bumper
    SelfHosted,
}

/// Connection settings stored in an Ecovacs config entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EcovacsConfig {
    pub username: String,
    pub password: String,

    /// Two letter country code of the account
    pub country: String,

    #[serde(default)]
    pub mode: InstanceMode,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub override_rest_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub override_mqtt_url: Option<String>,

    #[serde(default = "default_verify_mqtt_certificate")]
    pub verify_mqtt_certificate: bool,
}

fn default_verify_mqtt_certificate() -> bool {
    true
}

impl EcovacsConfig {
    /// Parse and validate config entry data
    pub fn from_entry_data(data: &Value) -> EcovacsResult<Self> {
        let config: Self = serde_json::from_value(data.clone())?;
        config.validate()?;
        Ok(config)
    }

    /// Whether the integration talks to a self-hosted server
    pub fn is_self_hosted(&self) -> bool {
        self.mode == InstanceMode::SelfHosted
    }

    fn validate(&self) -> EcovacsResult<()> {
        if !self.is_self_hosted() {
            return Ok(());
        }
        if self.override_rest_url.is_none() {
            return Err(EcovacsError::MissingOverride {
                key: "override_rest_url",
            });
        }
        if self.override_mqtt_url.is_none() {
            return Err(EcovacsError::MissingOverride {
                key: "override_mqtt_url",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cloud_defaults() {
        let config = EcovacsConfig::from_entry_data(&json!({
            "username": "user@example.com",
            "password": "secret",
            "country": "de"
        }))
        .unwrap();
        assert_eq!(config.mode, InstanceMode::Cloud);
        assert!(!config.is_self_hosted());
        assert!(config.verify_mqtt_certificate);
    }

    #[test]
    fn test_self_hosted() {
        let config = EcovacsConfig::from_entry_data(&json!({
            "username": "user",
            "password": "secret",
            "country": "it",
            "mode": "self_hosted",
            "override_rest_url": "http://bumper.local:8007",
            "override_mqtt_url": "mqtts://bumper.local:8883",
            "verify_mqtt_certificate": false
        }))
        .unwrap();
        assert!(config.is_self_hosted());
        assert!(!config.verify_mqtt_certificate);
    }

    #[test]
    fn test_self_hosted_requires_overrides() {
        let err = EcovacsConfig::from_entry_data(&json!({
            "username": "user",
            "password": "secret",
            "country": "it",
            "mode": "self_hosted",
            "override_rest_url": "http://bumper.local:8007"
        }))
        .unwrap_err();
        assert!(matches!(
            err,
            EcovacsError::MissingOverride {
                key: "override_mqtt_url"
            }
        ));
    }

    #[test]
    fn test_invalid_data() {
        let err = EcovacsConfig::from_entry_data(&json!({"username": "user"})).unwrap_err();
        assert!(matches!(err, EcovacsError::InvalidEntryData(_)));
    }
}
