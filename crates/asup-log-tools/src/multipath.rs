//! Reduce a Linux host's multipath configuration into flat per-section maps.

use asup_protocol::{MultipathConf, MultipathConfigTree, PropertyBlock, PropertyMap};

use crate::types::ExceptionsOverlay;

/// Flatten `conf` into the four multipath sections.
///
/// - `defaults`, `devices`: copies of their property lists.
/// - `blacklist`: device-level properties, overlaid by the individual
///   entries (entries win on a shared key).
/// - `blacklistExceptions`: exception device-level properties, overlaid
///   per `overlay`.
///
/// Values are whitespace-trimmed; commas are left for the normalizer.
pub fn flatten(conf: &MultipathConf, overlay: ExceptionsOverlay) -> MultipathConfigTree {
    let mut defaults = PropertyMap::new();
    apply(&mut defaults, &conf.defaults);

    let mut blacklist = PropertyMap::new();
    apply_all(&mut blacklist, &conf.blacklist.devices);
    apply(&mut blacklist, &conf.blacklist.entries);

    let mut blacklist_exceptions = PropertyMap::new();
    apply_all(&mut blacklist_exceptions, &conf.blacklist_exceptions.devices);
    match overlay {
        ExceptionsOverlay::Entries => {
            apply(&mut blacklist_exceptions, &conf.blacklist_exceptions.entries)
        }
        ExceptionsOverlay::LegacyBlacklistDevice => {
            apply_all(&mut blacklist_exceptions, &conf.blacklist.devices)
        }
    }

    let mut devices = PropertyMap::new();
    apply_all(&mut devices, &conf.devices.devices);

    MultipathConfigTree {
        defaults,
        blacklist,
        blacklist_exceptions,
        devices,
    }
}

fn apply(map: &mut PropertyMap, block: &PropertyBlock) {
    for (name, value) in block.iter() {
        map.insert(name.to_string(), value.trim().to_string());
    }
}

/// Device blocks are merged in document order; later blocks overwrite.
fn apply_all(map: &mut PropertyMap, blocks: &[PropertyBlock]) {
    for block in blocks {
        apply(map, block);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use asup_protocol::{DevicesSection, FilterSection, Property};

    fn block(props: &[(&str, &str)]) -> PropertyBlock {
        props.iter().map(|(n, v)| Property::new(*n, *v)).collect()
    }

    fn sample_conf() -> MultipathConf {
        MultipathConf {
            defaults: block(&[("polling_interval", " 10 "), ("user_friendly_names", "yes")]),
            blacklist: FilterSection {
                devices: vec![block(&[("vendor", ".*"), ("product", ".*")])],
                entries: block(&[("vendor", "HP"), ("devnode", "^sd[a]")]),
            },
            blacklist_exceptions: FilterSection {
                devices: vec![block(&[("vendor", "Nimble"), ("product", "Server")])],
                entries: block(&[("wwid", "2f7a"), ("product", "Array")]),
            },
            devices: DevicesSection {
                devices: vec![block(&[("vendor", "Nimble"), ("no_path_retry", "30")])],
            },
        }
    }

    #[test]
    fn defaults_and_devices_are_copied_and_trimmed() {
        let tree = flatten(&sample_conf(), ExceptionsOverlay::Entries);
        assert_eq!(tree.defaults.get("polling_interval").map(String::as_str), Some("10"));
        assert_eq!(tree.defaults.len(), 2);
        assert_eq!(tree.devices.get("no_path_retry").map(String::as_str), Some("30"));
    }

    #[test]
    fn blacklist_entries_win_over_device_properties() {
        let tree = flatten(&sample_conf(), ExceptionsOverlay::Entries);
        assert_eq!(tree.blacklist.get("vendor").map(String::as_str), Some("HP"));
        assert_eq!(tree.blacklist.get("product").map(String::as_str), Some(".*"));
        assert_eq!(tree.blacklist.get("devnode").map(String::as_str), Some("^sd[a]"));
    }

    #[test]
    fn exceptions_overlay_own_entries() {
        let tree = flatten(&sample_conf(), ExceptionsOverlay::Entries);
        let ex = &tree.blacklist_exceptions;
        assert_eq!(ex.get("vendor").map(String::as_str), Some("Nimble"));
        assert_eq!(ex.get("product").map(String::as_str), Some("Array"));
        assert_eq!(ex.get("wwid").map(String::as_str), Some("2f7a"));
    }

    #[test]
    fn exceptions_legacy_overlay_uses_blacklist_devices() {
        let tree = flatten(&sample_conf(), ExceptionsOverlay::LegacyBlacklistDevice);
        let ex = &tree.blacklist_exceptions;
        assert_eq!(ex.get("vendor").map(String::as_str), Some(".*"));
        assert_eq!(ex.get("product").map(String::as_str), Some(".*"));
        assert!(!ex.contains_key("wwid"));
    }

    #[test]
    fn later_device_blocks_overwrite_earlier() {
        let mut conf = sample_conf();
        conf.devices.devices.push(block(&[("vendor", "HPE")]));
        let tree = flatten(&conf, ExceptionsOverlay::Entries);
        assert_eq!(tree.devices.get("vendor").map(String::as_str), Some("HPE"));
    }

    #[test]
    fn commas_survive_flattening() {
        let mut conf = MultipathConf::default();
        conf.devices.devices.push(block(&[("prio_args", "alua,exclusive_pref_bit")]));
        let tree = flatten(&conf, ExceptionsOverlay::Entries);
        assert_eq!(
            tree.devices.get("prio_args").map(String::as_str),
            Some("alua,exclusive_pref_bit")
        );
    }

    #[test]
    fn empty_conf_flattens_to_empty_tree() {
        assert!(flatten(&MultipathConf::default(), ExceptionsOverlay::Entries).is_empty());
    }
}
