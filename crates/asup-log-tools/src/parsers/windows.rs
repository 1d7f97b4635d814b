//! Windows host-information decoder.
//!
//! The payload is an XML envelope whose four children each carry a JSON
//! document. Fields are decoded independently: one bad field is reported
//! and left at its default while the others still populate.

use asup_protocol::{
    MpioRegisteredDsms, OneOrMany, WindowsFeature, WindowsHostInfo, WindowsOs, WindowsSystemInfo,
};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{LogError, LogResult};

/// Number of JSON fields carried by the envelope.
pub const FIELD_COUNT: usize = 4;

#[derive(Debug, Default, Deserialize)]
struct WindowsEnvelope {
    #[serde(rename = "SystemInfo", default)]
    system_info: String,
    #[serde(rename = "OS", default)]
    os: String,
    #[serde(rename = "GetWindowsFeature", default)]
    windows_feature: String,
    #[serde(rename = "MpioRegisteredDsm", default)]
    mpio_registered_dsm: String,
}

/// Outcome of a Windows decode: whatever populated, plus per-field errors.
#[derive(Debug)]
pub struct WindowsDecode {
    pub info: WindowsHostInfo,
    pub field_errors: Vec<LogError>,
}

impl WindowsDecode {
    pub fn decoded_fields(&self) -> usize {
        FIELD_COUNT - self.field_errors.len()
    }
}

/// Decode a Windows payload.
///
/// Fails only when the XML envelope itself cannot be read; JSON field
/// failures are collected in `WindowsDecode::field_errors`.
pub fn decode(payload: &str) -> LogResult<WindowsDecode> {
    let envelope: WindowsEnvelope = quick_xml::de::from_str(payload)
        .map_err(|e| LogError::Decode(format!("windows envelope: {e}")))?;

    let mut field_errors = Vec::new();
    let system_info: WindowsSystemInfo =
        decode_field("SystemInfo", &envelope.system_info, &mut field_errors).unwrap_or_default();
    let os: WindowsOs = decode_field("OS", &envelope.os, &mut field_errors).unwrap_or_default();
    let features: Vec<WindowsFeature> = decode_field::<OneOrMany<WindowsFeature>>(
        "GetWindowsFeature",
        &envelope.windows_feature,
        &mut field_errors,
    )
    .map(Vec::from)
    .unwrap_or_default();
    let mpio_registered_dsms: MpioRegisteredDsms = decode_field(
        "MpioRegisteredDsm",
        &envelope.mpio_registered_dsm,
        &mut field_errors,
    )
    .unwrap_or_default();

    Ok(WindowsDecode {
        info: WindowsHostInfo {
            system_info,
            os,
            features,
            mpio_registered_dsms,
        },
        field_errors,
    })
}

fn decode_field<T: DeserializeOwned>(
    field: &str,
    json: &str,
    errors: &mut Vec<LogError>,
) -> Option<T> {
    match serde_json::from_str(json.trim()) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(field, error = %e, "unable to decode windows host info field");
            errors.push(LogError::Decode(format!("{field}: {e}")));
            None
        }
    }
}
