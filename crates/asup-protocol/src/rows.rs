//! Output rows and their column contracts.

use serde::{Deserialize, Serialize};

use crate::multipath::MultipathSection;

/// Host-info table header, in column order.
pub const HOST_INFO_COLUMNS: [&str; 18] = [
    "RowType",
    "HaveHostInfo",
    "SystemOsName",
    "SystemOsVersion",
    "SystemInfoName",
    "SystemInfoManufacturer",
    "SystemInfoModel",
    "WindowsHyper-V",
    "WindowsMultipath-IO",
    "WindowsMicrosoftDSM",
    "WindowsNimbleDSM",
    "SystemKernelVersion",
    "NCM",
    "Scaleout",
    "Oracle",
    "Docker",
    "NltVersion",
    "MultipathVersion",
];

/// Multipath table header, in column order.
pub const MULTIPATH_COLUMNS: [&str; 5] = [
    "SystemOsName",
    "RowType",
    "SectionName",
    "PropertyName",
    "PropertyValue",
];

pub const HOST_ROW_TYPE: &str = "Host";
pub const MULTIPATH_ROW_TYPE: &str = "multipath";

/// Concatenate identity parts with every whitespace character removed.
pub fn identity_key(parts: &[&str]) -> String {
    parts
        .iter()
        .flat_map(|p| p.chars())
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// One host-info table row. Windows-only columns stay empty for Linux hosts
/// and vice versa.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostInfoRow {
    pub row_type: String,
    pub have_host_info: String,
    pub os_name: String,
    pub os_version: String,
    pub name: String,
    pub manufacturer: String,
    pub model: String,
    pub windows_hyper_v: String,
    pub windows_multipath_io: String,
    pub windows_microsoft_dsm: String,
    pub windows_nimble_dsm: String,
    pub kernel_version: String,
    pub ncm: String,
    pub scaleout: String,
    pub oracle: String,
    pub docker: String,
    pub nlt_version: String,
    pub multipath_version: String,
}

impl HostInfoRow {
    /// Field values in `HOST_INFO_COLUMNS` order.
    pub fn fields(&self) -> [&str; 18] {
        [
            &self.row_type,
            &self.have_host_info,
            &self.os_name,
            &self.os_version,
            &self.name,
            &self.manufacturer,
            &self.model,
            &self.windows_hyper_v,
            &self.windows_multipath_io,
            &self.windows_microsoft_dsm,
            &self.windows_nimble_dsm,
            &self.kernel_version,
            &self.ncm,
            &self.scaleout,
            &self.oracle,
            &self.docker,
            &self.nlt_version,
            &self.multipath_version,
        ]
    }

    /// Deduplication key: name, manufacturer, model and OS version.
    pub fn identity_key(&self) -> String {
        identity_key(&[&self.name, &self.manufacturer, &self.model, &self.os_version])
    }
}

/// One multipath table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultipathRow {
    /// Identity key of the owning host row (not emitted).
    pub host_key: String,
    /// Host the configuration was collected from.
    pub host: String,
    pub section: MultipathSection,
    pub property: String,
    pub value: String,
}

impl MultipathRow {
    /// Field values in `MULTIPATH_COLUMNS` order.
    pub fn fields(&self) -> [&str; 5] {
        [
            &self.host,
            MULTIPATH_ROW_TYPE,
            self.section.as_str(),
            &self.property,
            &self.value,
        ]
    }

    /// Host key + section + property name.
    pub fn identity_key(&self) -> String {
        format!("{}{}{}", self.host_key, self.section.as_str(), self.property)
    }
}
