//! The common configuration head shared by both scan variants

use bon::Builder;

/// Length of the device serial number field in bytes.
pub const SERIAL_NUMBER_LEN: usize = 8;

/// Length of the configuration name field in bytes.
pub const CONFIG_NAME_LEN: usize = 40;

/// Total length of the common configuration head:
/// scan type tag (1) + configuration index (2) + serial number (8) + name (40).
pub const CONFIG_HEAD_LEN: usize = 1 + 2 + SERIAL_NUMBER_LEN + CONFIG_NAME_LEN;

/// Scan type tag marking a slew configuration buffer.
pub const SLEW_SCAN_TYPE: u8 = 2;

/// Common prefix of both configuration variants.
///
/// The serial number and configuration name are fixed-width fields, fully
/// present in every valid buffer. Short values are NUL-padded on the wire and
/// preserved here byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct ScanConfigHead {
    pub scan_type: u8,
    pub scan_config_index: u16,
    pub serial_number: [u8; SERIAL_NUMBER_LEN],
    pub config_name: [u8; CONFIG_NAME_LEN],
}

impl ScanConfigHead {
    /// Serial number as text, trimmed at the first NUL.
    pub fn serial_number_str(&self) -> String {
        trim_nul(&self.serial_number)
    }

    /// Configuration name as text, trimmed at the first NUL.
    pub fn config_name_str(&self) -> String {
        trim_nul(&self.config_name)
    }

    /// Appends the 51-byte wire form of the head.
    pub fn encode_into(&self, out: &mut Vec<u8>) {
        out.push(self.scan_type);
        out.extend_from_slice(&self.scan_config_index.to_le_bytes());
        out.extend_from_slice(&self.serial_number);
        out.extend_from_slice(&self.config_name);
    }
}

fn trim_nul(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end]).into_owned()
}
