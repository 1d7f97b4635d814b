//! Linux host-information schema, as written by the host toolkit into the
//! `<root>` payload of a record.
//!
//! Field names follow the XML element/attribute names (`@` marks an
//! attribute). Every element is optional and decodes to its default.

use serde::{Deserialize, Serialize};

/// Root of a Linux host-information payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinuxHostInfo {
    #[serde(rename = "SystemInfo", default)]
    pub system_info: LinuxSystemInfo,
    #[serde(rename = "OS", default)]
    pub os: LinuxOs,
    /// Host toolkit (NLT) version and feature flags.
    #[serde(rename = "NLT", default)]
    pub nlt: NltInfo,
    #[serde(rename = "Multipath", default)]
    pub multipath: MultipathInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinuxSystemInfo {
    #[serde(rename = "Hostname", default)]
    pub hostname: String,
    #[serde(rename = "Manufacturer", default)]
    pub manufacturer: String,
    #[serde(rename = "ProductName", default)]
    pub product_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinuxOs {
    #[serde(rename = "Distro", default)]
    pub distro: String,
    #[serde(rename = "Version", default)]
    pub version: String,
    #[serde(rename = "Kernel", default)]
    pub kernel: String,
}

/// Toolkit feature flags. Values are boolean-as-text (`true`/`false`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NltInfo {
    #[serde(rename = "@version", default)]
    pub version: String,
    /// Cluster management.
    #[serde(rename = "NCM", default)]
    pub ncm: String,
    /// Cluster scale-out.
    #[serde(rename = "NCMScaleout", default)]
    pub ncm_scaleout: String,
    /// Database integration.
    #[serde(rename = "Oracle", default)]
    pub oracle: String,
    /// Container runtime integration.
    #[serde(rename = "Docker", default)]
    pub docker: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultipathInfo {
    /// multipath-tools version.
    #[serde(rename = "@version", default)]
    pub version: String,
    #[serde(rename = "MultipathConf", default)]
    pub conf: MultipathConf,
}

/// The host's `multipath.conf`, one block per section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultipathConf {
    #[serde(rename = "Defaults", default)]
    pub defaults: PropertyBlock,
    #[serde(rename = "Blacklist", default)]
    pub blacklist: FilterSection,
    #[serde(rename = "BlacklistExceptions", default)]
    pub blacklist_exceptions: FilterSection,
    #[serde(rename = "Devices", default)]
    pub devices: DevicesSection,
}

/// `blacklist` / `blacklist_exceptions`: device sub-sections plus
/// individual entries (`wwid`, `devnode`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSection {
    #[serde(rename = "Device", default)]
    pub devices: Vec<PropertyBlock>,
    #[serde(rename = "Entries", default)]
    pub entries: PropertyBlock,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevicesSection {
    #[serde(rename = "Device", default)]
    pub devices: Vec<PropertyBlock>,
}

/// A `<Properties>` list wrapped by its section element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyBlock {
    #[serde(rename = "Properties", default)]
    pub properties: PropertyList,
}

impl PropertyBlock {
    /// Iterate `(name, value)` pairs in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .property
            .iter()
            .map(|p| (p.name.as_str(), p.value.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.properties.property.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyList {
    #[serde(rename = "Property", default)]
    pub property: Vec<Property>,
}

/// `<Property name=".." value=".."/>`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(rename = "@value", default)]
    pub value: String,
}

impl Property {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl FromIterator<Property> for PropertyBlock {
    fn from_iter<I: IntoIterator<Item = Property>>(iter: I) -> Self {
        Self {
            properties: PropertyList {
                property: iter.into_iter().collect(),
            },
        }
    }
}
