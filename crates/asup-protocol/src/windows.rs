//! Windows host-information schema. Each part arrives as a JSON document
//! produced by PowerShell (`Get-CimInstance`, `Get-WindowsFeature`,
//! `Get-MPIORegisteredDSM`), so field names are PascalCase.

use serde::{Deserialize, Deserializer, Serialize};

/// Decoded Windows host information. Parts that failed to decode stay at
/// their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowsHostInfo {
    pub system_info: WindowsSystemInfo,
    pub os: WindowsOs,
    pub features: Vec<WindowsFeature>,
    pub mpio_registered_dsms: MpioRegisteredDsms,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowsSystemInfo {
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Manufacturer", default)]
    pub manufacturer: String,
    #[serde(rename = "Model", default)]
    pub model: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowsOs {
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Version", default)]
    pub version: String,
}

/// An optional Windows feature (e.g. `Hyper-V`, `Multipath-IO`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowsFeature {
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Installed", default)]
    pub installed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MpioRegisteredDsms {
    #[serde(
        rename = "DsmParameters",
        default,
        deserialize_with = "one_or_many"
    )]
    pub dsm_parameters: Vec<DsmParameter>,
}

/// A device-specific module registered with MPIO.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DsmParameter {
    #[serde(rename = "DsmName", default)]
    pub dsm_name: String,
    #[serde(rename = "DsmVersion", default)]
    pub dsm_version: String,
}

/// PowerShell serializes a one-element collection as a bare object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> From<OneOrMany<T>> for Vec<T> {
    fn from(value: OneOrMany<T>) -> Self {
        match value {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

/// `deserialize_with` helper accepting an array or a single object.
pub fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    OneOrMany::deserialize(deserializer).map(Vec::from)
}
