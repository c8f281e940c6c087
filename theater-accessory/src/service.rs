//! Accessory service and characteristic model
//!
//! A plain-data description of the services this accessory exposes to the
//! host bridge. The host owns the real characteristic machinery; this model
//! carries only what the contract needs: static information characteristics,
//! the toggle, and the three capped trigger characteristics. Live values (the
//! toggle state, trigger pulses) flow through the accessory facade, not
//! through these descriptions.

use serde::{Deserialize, Serialize};

use theater_state::SwitchEvent;

/// Kind of accessory service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceKind {
    /// Static device information (manufacturer, model, serial)
    AccessoryInformation,
    /// A read/write on/off switch
    Switch,
    /// A write-only momentary trigger
    StatelessProgrammableSwitch,
}

/// Kind of characteristic within a service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CharacteristicKind {
    /// Device manufacturer string
    Manufacturer,
    /// Device model string
    Model,
    /// Device serial number string
    SerialNumber,
    /// Boolean on/off level
    On,
    /// Momentary trigger pulse
    ProgrammableSwitchEvent,
    /// Position of the service in its label group
    ServiceLabelIndex,
}

/// A characteristic's static value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CharacteristicValue {
    /// String-valued characteristic
    Text(String),
    /// Boolean-valued characteristic
    Bool(bool),
    /// Small-integer-valued characteristic
    UInt(u8),
}

/// One characteristic of a service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Characteristic {
    /// What this characteristic is
    pub kind: CharacteristicKind,
    /// Static value, when the characteristic has one
    pub value: Option<CharacteristicValue>,
    /// Maximum discrete event value, for capped trigger characteristics
    pub max_value: Option<u8>,
}

impl Characteristic {
    /// A string characteristic with a fixed value
    pub fn text(kind: CharacteristicKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: Some(CharacteristicValue::Text(value.into())),
            max_value: None,
        }
    }

    /// A small-integer characteristic with a fixed value
    pub fn uint(kind: CharacteristicKind, value: u8) -> Self {
        Self {
            kind,
            value: Some(CharacteristicValue::UInt(value)),
            max_value: None,
        }
    }

    /// A value-less characteristic, e.g. the live toggle level
    pub fn dynamic(kind: CharacteristicKind) -> Self {
        Self {
            kind,
            value: None,
            max_value: None,
        }
    }

    /// The trigger characteristic, capped to the single event value 0
    pub fn event_trigger() -> Self {
        Self {
            kind: CharacteristicKind::ProgrammableSwitchEvent,
            value: None,
            max_value: Some(0),
        }
    }
}

/// One service exposed by the accessory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    /// What this service is
    pub kind: ServiceKind,
    /// Display name of the service
    pub name: String,
    /// The service's characteristics
    pub characteristics: Vec<Characteristic>,
}

impl Service {
    /// Create an empty service
    pub fn new(kind: ServiceKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            characteristics: Vec::new(),
        }
    }

    /// Add a characteristic
    pub fn with_characteristic(mut self, characteristic: Characteristic) -> Self {
        self.characteristics.push(characteristic);
        self
    }

    /// Look up a characteristic by kind
    pub fn characteristic(&self, kind: CharacteristicKind) -> Option<&Characteristic> {
        self.characteristics.iter().find(|c| c.kind == kind)
    }
}

/// Build the full service list for one theater-mode accessory
///
/// Device information, the "Theater Mode" toggle, and the Play/Pause/Stop
/// trigger services with label indices 1, 2, 3.
pub fn theater_mode_services() -> Vec<Service> {
    let information = Service::new(ServiceKind::AccessoryInformation, "Information")
        .with_characteristic(Characteristic::text(CharacteristicKind::Manufacturer, "Apple"))
        .with_characteristic(Characteristic::text(CharacteristicKind::Model, "Apple TV"))
        .with_characteristic(Characteristic::text(CharacteristicKind::SerialNumber, "00000000"));

    let toggle = Service::new(ServiceKind::Switch, "Theater Mode")
        .with_characteristic(Characteristic::dynamic(CharacteristicKind::On));

    let mut services = vec![information, toggle];
    for event in [SwitchEvent::Play, SwitchEvent::Pause, SwitchEvent::Stop] {
        services.push(
            Service::new(ServiceKind::StatelessProgrammableSwitch, event.as_str())
                .with_characteristic(Characteristic::event_trigger())
                .with_characteristic(Characteristic::uint(
                    CharacteristicKind::ServiceLabelIndex,
                    event.label_index(),
                )),
        );
    }
    services
}
