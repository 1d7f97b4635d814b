use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Section of a flattened multipath configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MultipathSection {
    Defaults,
    Blacklist,
    BlacklistExceptions,
    Devices,
}

impl MultipathSection {
    pub const ALL: [MultipathSection; 4] = [
        Self::Defaults,
        Self::Blacklist,
        Self::BlacklistExceptions,
        Self::Devices,
    ];

    /// Name written to the `SectionName` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Defaults => "defaults",
            Self::Blacklist => "blacklist",
            Self::BlacklistExceptions => "blacklistExceptions",
            Self::Devices => "devices",
        }
    }
}

impl std::fmt::Display for MultipathSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Property name → value, unique per section.
pub type PropertyMap = BTreeMap<String, String>;

/// A host's multipath configuration reduced to one flat map per section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultipathConfigTree {
    pub defaults: PropertyMap,
    pub blacklist: PropertyMap,
    pub blacklist_exceptions: PropertyMap,
    pub devices: PropertyMap,
}

impl MultipathConfigTree {
    pub fn section(&self, section: MultipathSection) -> &PropertyMap {
        match section {
            MultipathSection::Defaults => &self.defaults,
            MultipathSection::Blacklist => &self.blacklist,
            MultipathSection::BlacklistExceptions => &self.blacklist_exceptions,
            MultipathSection::Devices => &self.devices,
        }
    }

    /// All sections in column order.
    pub fn sections(&self) -> impl Iterator<Item = (MultipathSection, &PropertyMap)> {
        MultipathSection::ALL.into_iter().map(|s| (s, self.section(s)))
    }

    /// Total number of properties across all sections.
    pub fn len(&self) -> usize {
        self.sections().map(|(_, m)| m.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
