//! Sample host-information payloads and log streams for testing.

use quick_xml::escape::escape;
use serde_json::json;

/// A valid 24-character record timestamp.
pub const TIMESTAMP: &str = "2020-01-01T00:00:00.000Z";

/// `<itn_info>` record header carrying `timestamp`.
pub fn header(timestamp: &str) -> String {
    format!(
        "<itn_info><TimeStamp>{}</TimeStamp></itn_info>",
        escape(timestamp)
    )
}

/// Concatenate payloads into a host-info log stream, each preceded by a
/// header and the whole followed by block padding.
pub fn log_stream(payloads: &[String]) -> String {
    let mut out = String::new();
    for payload in payloads {
        out.push_str(&header(TIMESTAMP));
        out.push('\n');
        out.push_str(payload);
        out.push('\n');
    }
    out.push_str(&"\0".repeat(256));
    out
}

/// A Linux payload with a populated multipath configuration.
///
/// The blacklist's device and entry blocks both set `vendor`; the devices
/// section carries a comma-bearing `prio_args` value.
pub fn linux_payload(hostname: &str, manufacturer: &str, product: &str, os_version: &str) -> String {
    format!(
        r#"<root>
  <SystemInfo>
    <Hostname>{hostname}</Hostname>
    <Manufacturer>{manufacturer}</Manufacturer>
    <ProductName>{product}</ProductName>
  </SystemInfo>
  <OS>
    <Distro>CentOS Linux</Distro>
    <Version>{os_version}</Version>
    <Kernel>3.10.0-957.el7.x86_64</Kernel>
  </OS>
  <NLT version="2.5.0">
    <NCM>true</NCM>
    <NCMScaleout>false</NCMScaleout>
    <Oracle>false</Oracle>
    <Docker>true</Docker>
  </NLT>
  <Multipath version="0.4.9">
    <MultipathConf>
      <Defaults>
        <Properties>
          <Property name="user_friendly_names" value="yes"/>
          <Property name="find_multipaths" value=" no "/>
        </Properties>
      </Defaults>
      <Blacklist>
        <Device>
          <Properties>
            <Property name="vendor" value=".*"/>
            <Property name="product" value=".*"/>
          </Properties>
        </Device>
        <Entries>
          <Properties>
            <Property name="devnode" value="^hd[a-z]"/>
            <Property name="vendor" value="HP"/>
          </Properties>
        </Entries>
      </Blacklist>
      <BlacklistExceptions>
        <Device>
          <Properties>
            <Property name="vendor" value="Nimble"/>
            <Property name="product" value="Server"/>
          </Properties>
        </Device>
        <Entries>
          <Properties>
            <Property name="wwid" value="2f7ab1c5e8d9a0b1c6c9ce9002a4f8a2d"/>
          </Properties>
        </Entries>
      </BlacklistExceptions>
      <Devices>
        <Device>
          <Properties>
            <Property name="vendor" value="Nimble"/>
            <Property name="product" value="Server"/>
            <Property name="path_grouping_policy" value="group_by_prio"/>
            <Property name="prio_args" value="alua,exclusive_pref_bit"/>
          </Properties>
        </Device>
      </Devices>
    </MultipathConf>
  </Multipath>
</root>"#,
        hostname = escape(hostname),
        manufacturer = escape(manufacturer),
        product = escape(product),
        os_version = escape(os_version),
    )
}

/// A Windows payload with Hyper-V and MPIO installed and two DSMs.
pub fn windows_payload(name: &str, manufacturer: &str, model: &str, os_version: &str) -> String {
    let system_info = json!({"Name": name, "Manufacturer": manufacturer, "Model": model});
    let os = json!({"Name": "Microsoft Windows Server 2016 Standard", "Version": os_version});
    let features = json!([
        {"Name": "Hyper-V", "Installed": true},
        {"Name": "Multipath-IO", "Installed": true},
    ]);
    let dsms = json!({"DsmParameters": [
        {"DsmName": "Microsoft DSM", "DsmVersion": "10.0.14393"},
        {"DsmName": "Nimble DSM", "DsmVersion": "7.0.2.0"},
    ]});
    windows_payload_with(
        &system_info.to_string(),
        &os.to_string(),
        &features.to_string(),
        &dsms.to_string(),
    )
}

/// A Windows envelope with the given raw JSON text in each field.
pub fn windows_payload_with(
    system_info: &str,
    os: &str,
    features: &str,
    mpio_dsms: &str,
) -> String {
    format!(
        "<root>\n  <SystemInfo>{}</SystemInfo>\n  <OS>{}</OS>\n  <GetWindowsFeature>{}</GetWindowsFeature>\n  <MpioRegisteredDsm>{}</MpioRegisteredDsm>\n</root>",
        escape(system_info),
        escape(os),
        escape(features),
        escape(mpio_dsms),
    )
}
