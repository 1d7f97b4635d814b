//! Linux host-information decoder (nested XML).

use asup_protocol::LinuxHostInfo;

use crate::error::{LogError, LogResult};

/// Decode a Linux `<root>` payload, including its multipath configuration.
pub fn decode(payload: &str) -> LogResult<LinuxHostInfo> {
    quick_xml::de::from_str(payload)
        .map_err(|e| LogError::Decode(format!("linux host info: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;

    #[test]
    fn decode_full_linux_payload() {
        let info = decode(&mock::linux_payload("host-a", "HPE", "ProLiant DL380", "7.6")).unwrap();
        assert_eq!(info.system_info.hostname, "host-a");
        assert_eq!(info.system_info.manufacturer, "HPE");
        assert_eq!(info.system_info.product_name, "ProLiant DL380");
        assert_eq!(info.os.distro, "CentOS Linux");
        assert_eq!(info.os.version, "7.6");
        assert_eq!(info.os.kernel, "3.10.0-957.el7.x86_64");
        assert_eq!(info.nlt.version, "2.5.0");
        assert_eq!(info.nlt.ncm, "true");
        assert_eq!(info.nlt.ncm_scaleout, "false");
        assert_eq!(info.nlt.docker, "true");
        assert_eq!(info.multipath.version, "0.4.9");
    }

    #[test]
    fn decode_multipath_tree() {
        let info = decode(&mock::linux_payload("host-a", "HPE", "DL380", "7.6")).unwrap();
        let conf = &info.multipath.conf;
        assert_eq!(conf.defaults.properties.property.len(), 2);
        assert_eq!(conf.blacklist.devices.len(), 1);
        assert_eq!(conf.blacklist.entries.properties.property[0].name, "devnode");
        assert_eq!(conf.blacklist_exceptions.entries.properties.property[0].name, "wwid");
        assert_eq!(conf.devices.devices.len(), 1);
        let vendor = conf.devices.devices[0]
            .iter()
            .find(|(name, _)| *name == "vendor")
            .map(|(_, value)| value);
        assert_eq!(vendor, Some("Nimble"));
    }

    #[test]
    fn decode_minimal_payload_defaults_missing_sections() {
        let xml = "<root><SystemInfo><Hostname>bare</Hostname></SystemInfo></root>";
        let info = decode(xml).unwrap();
        assert_eq!(info.system_info.hostname, "bare");
        assert!(info.os.version.is_empty());
        assert!(info.multipath.conf.defaults.is_empty());
        assert!(info.multipath.conf.devices.devices.is_empty());
    }

    #[test]
    fn decode_unescapes_entities() {
        let xml = "<root><SystemInfo><Manufacturer>Smith &amp; Co</Manufacturer></SystemInfo></root>";
        let info = decode(xml).unwrap();
        assert_eq!(info.system_info.manufacturer, "Smith & Co");
    }

    #[test]
    fn decode_malformed_xml_is_decode_error() {
        let err = decode("<root><SystemInfo><Hostname>x</SystemInfo></root>").unwrap_err();
        assert!(matches!(err, LogError::Decode(_)));
    }
}
