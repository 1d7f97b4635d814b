//! Map decoded host information onto flat, CSV-safe output rows.

use std::collections::HashMap;

use asup_protocol::{
    DecodedHostInfo, HOST_ROW_TYPE, HostInfoRow, LinuxHostInfo, MultipathConfigTree,
    MultipathRow, WindowsHostInfo,
};

/// Value written to `HaveHostInfo` for every decoded host.
const HAVE_HOST_INFO: &str = "true";
/// Marker for an installed Windows feature.
const INSTALLED: &str = "X";

const HYPER_V: &str = "WindowsHyper-V";
const MULTIPATH_IO: &str = "WindowsMultipath-IO";
const MICROSOFT_DSM: &str = "WindowsMicrosoftDSM";
const NIMBLE_DSM: &str = "WindowsNimbleDSM";

/// Replace commas so values can be joined without quoting.
pub fn csv_safe(value: &str) -> String {
    value.replace(',', "_")
}

/// Build the host-info row for either OS family.
pub fn host_row(info: &DecodedHostInfo) -> HostInfoRow {
    match info {
        DecodedHostInfo::Linux(linux) => linux_row(linux),
        DecodedHostInfo::Windows(windows) => windows_row(windows),
    }
}

pub fn linux_row(info: &LinuxHostInfo) -> HostInfoRow {
    HostInfoRow {
        row_type: HOST_ROW_TYPE.into(),
        have_host_info: HAVE_HOST_INFO.into(),
        os_name: csv_safe(&info.os.distro),
        os_version: csv_safe(&info.os.version),
        name: csv_safe(&info.system_info.hostname),
        manufacturer: csv_safe(&info.system_info.manufacturer),
        model: csv_safe(&info.system_info.product_name),
        kernel_version: csv_safe(&info.os.kernel),
        ncm: csv_safe(&info.nlt.ncm),
        scaleout: csv_safe(&info.nlt.ncm_scaleout),
        oracle: csv_safe(&info.nlt.oracle),
        docker: csv_safe(&info.nlt.docker),
        nlt_version: csv_safe(&info.nlt.version),
        multipath_version: csv_safe(&info.multipath.version),
        ..Default::default()
    }
}

pub fn windows_row(info: &WindowsHostInfo) -> HostInfoRow {
    // Keyed like the output columns: "Windows" + name without spaces.
    let mut attributes: HashMap<String, String> = HashMap::new();
    for feature in info.features.iter().filter(|f| f.installed) {
        attributes.insert(windows_key(&feature.name), INSTALLED.into());
    }
    for dsm in &info.mpio_registered_dsms.dsm_parameters {
        attributes.insert(windows_key(&dsm.dsm_name), csv_safe(&dsm.dsm_version));
    }
    let column = |key: &str| attributes.get(key).cloned().unwrap_or_default();

    HostInfoRow {
        row_type: HOST_ROW_TYPE.into(),
        have_host_info: HAVE_HOST_INFO.into(),
        os_name: csv_safe(&info.os.name),
        os_version: csv_safe(&info.os.version),
        name: csv_safe(&info.system_info.name),
        manufacturer: csv_safe(&info.system_info.manufacturer),
        model: csv_safe(&info.system_info.model),
        windows_hyper_v: column(HYPER_V),
        windows_multipath_io: column(MULTIPATH_IO),
        windows_microsoft_dsm: column(MICROSOFT_DSM),
        windows_nimble_dsm: column(NIMBLE_DSM),
        ..Default::default()
    }
}

fn windows_key(name: &str) -> String {
    format!("Windows{}", csv_safe(&name.replace(' ', "")))
}

/// One multipath row per flattened property, owned by `host`.
pub fn multipath_rows(host: &HostInfoRow, tree: &MultipathConfigTree) -> Vec<MultipathRow> {
    let host_key = host.identity_key();
    tree.sections()
        .flat_map(|(section, props)| {
            let host_key = &host_key;
            props.iter().map(move |(name, value)| MultipathRow {
                host_key: host_key.clone(),
                host: host.name.clone(),
                section,
                property: csv_safe(name),
                value: csv_safe(value),
            })
        })
        .collect()
}
