//! Device capability sets
//!
//! Every device carries one [`Capabilities`] value tagged with the kind of
//! device it describes. Entity descriptions declare the [`CapabilityType`] they
//! apply to and pull individual capability objects out of the set.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of device a capability set belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapabilitiesKind {
    /// Robot vacuum cleaner
    Vacuum,
    /// Robot lawn mower
    Mower,
}

impl fmt::Display for CapabilitiesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CapabilitiesKind::Vacuum => write!(f, "vacuum"),
            CapabilitiesKind::Mower => write!(f, "mower"),
        }
    }
}

/// Capability set type an entity description applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CapabilityType {
    /// The base capability set shared by every device
    #[default]
    Any,
    /// Only capability sets of exactly this kind
    Kind(CapabilitiesKind),
}

impl CapabilityType {
    /// Check whether a capability set is of this type
    pub fn matches(&self, capabilities: &Capabilities) -> bool {
        match self {
            CapabilityType::Any => true,
            CapabilityType::Kind(kind) => capabilities.kind() == *kind,
        }
    }
}

impl From<CapabilitiesKind> for CapabilityType {
    fn from(kind: CapabilitiesKind) -> Self {
        CapabilityType::Kind(kind)
    }
}

/// Events a device publishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Event {
    Battery,
    Error,
    NetworkInfo,
    Stats,
    TotalStats,
    LifeSpan,
    FanSpeed,
    WaterInfo,
    CleanCount,
    AdvancedMode,
    ContinuousCleaning,
    CarpetAutoFanBoost,
    TrueDetect,
    BorderSwitch,
    CutDirection,
    Volume,
}

/// Read-only capability backed by a single event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilityEvent {
    pub event: Event,
}

impl CapabilityEvent {
    pub fn new(event: Event) -> Self {
        Self { event }
    }
}

/// Capability whose value can also be set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilitySet {
    pub event: Event,
}

impl CapabilitySet {
    pub fn new(event: Event) -> Self {
        Self { event }
    }
}

/// Settable capability restricted to a fixed list of values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilitySetTypes {
    pub event: Event,
    pub types: Vec<String>,
}

impl CapabilitySetTypes {
    pub fn new(event: Event, types: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            event,
            types: types.into_iter().map(Into::into).collect(),
        }
    }
}

/// Consumable component whose remaining life is tracked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifeSpan {
    Brush,
    SideBrush,
    Filter,
    LensBrush,
    Blade,
    UnitCareFilter,
}

impl LifeSpan {
    /// Identifier used in entity keys
    pub fn as_str(&self) -> &'static str {
        match self {
            LifeSpan::Brush => "brush",
            LifeSpan::SideBrush => "side_brush",
            LifeSpan::Filter => "filter",
            LifeSpan::LensBrush => "lens_brush",
            LifeSpan::Blade => "blade",
            LifeSpan::UnitCareFilter => "unit_care_filter",
        }
    }
}

/// Life span capability with the components a device reports
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilityLifeSpan {
    pub event: Event,
    pub types: Vec<LifeSpan>,
}

/// Cleaning statistics for the current job and the device lifetime
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilityStats {
    pub clean: CapabilityEvent,
    pub total: CapabilityEvent,
}

/// Capability set of a single device
///
/// The base capabilities (battery, error, network) are always present; the
/// rest depend on the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capabilities {
    kind: CapabilitiesKind,
    pub battery: CapabilityEvent,
    pub error: CapabilityEvent,
    pub network: CapabilityEvent,
    pub stats: Option<CapabilityStats>,
    pub life_span: Option<CapabilityLifeSpan>,
    pub fan_speed: Option<CapabilitySetTypes>,
    pub water: Option<CapabilitySetTypes>,
    pub clean_count: Option<CapabilitySet>,
    pub advanced_mode: Option<CapabilitySet>,
    pub continuous_cleaning: Option<CapabilitySet>,
    pub carpet_auto_fan_boost: Option<CapabilitySet>,
    pub true_detect: Option<CapabilitySet>,
    pub border_switch: Option<CapabilitySet>,
    pub cut_direction: Option<CapabilitySet>,
    pub volume: Option<CapabilitySet>,
}

impl Capabilities {
    /// Create a capability set holding only the base capabilities
    pub fn new(kind: CapabilitiesKind) -> Self {
        Self {
            kind,
            battery: CapabilityEvent::new(Event::Battery),
            error: CapabilityEvent::new(Event::Error),
            network: CapabilityEvent::new(Event::NetworkInfo),
            stats: None,
            life_span: None,
            fan_speed: None,
            water: None,
            clean_count: None,
            advanced_mode: None,
            continuous_cleaning: None,
            carpet_auto_fan_boost: None,
            true_detect: None,
            border_switch: None,
            cut_direction: None,
            volume: None,
        }
    }

    /// Base vacuum capabilities
    pub fn vacuum() -> Self {
        Self::new(CapabilitiesKind::Vacuum)
    }

    /// Base mower capabilities
    pub fn mower() -> Self {
        Self::new(CapabilitiesKind::Mower)
    }

    /// Kind tag of this capability set
    pub fn kind(&self) -> CapabilitiesKind {
        self.kind
    }

    pub fn with_stats(mut self) -> Self {
        self.stats = Some(CapabilityStats {
            clean: CapabilityEvent::new(Event::Stats),
            total: CapabilityEvent::new(Event::TotalStats),
        });
        self
    }

    pub fn with_life_span(mut self, types: impl IntoIterator<Item = LifeSpan>) -> Self {
        self.life_span = Some(CapabilityLifeSpan {
            event: Event::LifeSpan,
            types: types.into_iter().collect(),
        });
        self
    }

    pub fn with_fan_speed(mut self, speeds: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.fan_speed = Some(CapabilitySetTypes::new(Event::FanSpeed, speeds));
        self
    }

    pub fn with_water(mut self, amounts: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.water = Some(CapabilitySetTypes::new(Event::WaterInfo, amounts));
        self
    }

    pub fn with_clean_count(mut self) -> Self {
        self.clean_count = Some(CapabilitySet::new(Event::CleanCount));
        self
    }

    pub fn with_advanced_mode(mut self) -> Self {
        self.advanced_mode = Some(CapabilitySet::new(Event::AdvancedMode));
        self
    }

    pub fn with_continuous_cleaning(mut self) -> Self {
        self.continuous_cleaning = Some(CapabilitySet::new(Event::ContinuousCleaning));
        self
    }

    pub fn with_carpet_auto_fan_boost(mut self) -> Self {
        self.carpet_auto_fan_boost = Some(CapabilitySet::new(Event::CarpetAutoFanBoost));
        self
    }

    pub fn with_true_detect(mut self) -> Self {
        self.true_detect = Some(CapabilitySet::new(Event::TrueDetect));
        self
    }

    pub fn with_border_switch(mut self) -> Self {
        self.border_switch = Some(CapabilitySet::new(Event::BorderSwitch));
        self
    }

    pub fn with_cut_direction(mut self) -> Self {
        self.cut_direction = Some(CapabilitySet::new(Event::CutDirection));
        self
    }

    pub fn with_volume(mut self) -> Self {
        self.volume = Some(CapabilitySet::new(Event::Volume));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_matches_every_kind() {
        assert!(CapabilityType::Any.matches(&Capabilities::vacuum()));
        assert!(CapabilityType::Any.matches(&Capabilities::mower()));
    }

    #[test]
    fn test_kind_matches_exactly() {
        let vacuum: CapabilityType = CapabilitiesKind::Vacuum.into();
        assert!(vacuum.matches(&Capabilities::vacuum()));
        assert!(!vacuum.matches(&Capabilities::mower()));
    }

    #[test]
    fn test_base_capabilities_always_present() {
        let caps = Capabilities::mower();
        assert_eq!(caps.battery.event, Event::Battery);
        assert_eq!(caps.error.event, Event::Error);
        assert!(caps.stats.is_none());
        assert!(caps.cut_direction.is_none());
    }

    #[test]
    fn test_builder() {
        let caps = Capabilities::vacuum()
            .with_stats()
            .with_fan_speed(["quiet", "normal", "max"])
            .with_life_span([LifeSpan::Brush, LifeSpan::Filter]);
        assert_eq!(caps.kind(), CapabilitiesKind::Vacuum);
        assert_eq!(caps.stats.unwrap().total.event, Event::TotalStats);
        assert_eq!(caps.fan_speed.unwrap().types, vec!["quiet", "normal", "max"]);
        assert_eq!(caps.life_span.unwrap().types.len(), 2);
    }
}
