//! The fixed and slew scan configuration records

use bon::Builder;

use super::header::{CONFIG_HEAD_LEN, ScanConfigHead};

/// Length in bytes of a complete fixed configuration record.
pub const FIXED_CONFIG_LEN: usize = CONFIG_HEAD_LEN + 10;

/// Length in bytes of the slew configuration head: common head + shared
/// repeat count (2) + section count (1).
pub const SLEW_HEAD_LEN: usize = CONFIG_HEAD_LEN + 3;

/// Length in bytes of one slew section record.
pub const SECTION_LEN: usize = 10;

/// Classification tag for a configuration buffer, decided from the leading
/// scan type byte before any field decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigVariant {
    Fixed,
    Slew,
}

/// A single contiguous wavelength sweep. The tail after the head (10 bytes):
/// - 2 bytes: wavelength start in nm (u16, little-endian)
/// - 2 bytes: wavelength end in nm (u16, little-endian)
/// - 2 bytes: pattern width in pixels (u16, little-endian)
/// - 2 bytes: number of patterns (u16, little-endian)
/// - 2 bytes: number of repeats (u16, little-endian)
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct FixedScanConfig {
    pub head: ScanConfigHead,
    pub wavelength_start_nm: u16,
    pub wavelength_end_nm: u16,
    pub width_px: u16,
    pub num_patterns: u16,
    pub num_repeats: u16,
}

impl FixedScanConfig {
    /// The exact 61-byte wire form; inverse of `decode_fixed_config`.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(FIXED_CONFIG_LEN);
        self.head.encode_into(&mut out);
        out.extend_from_slice(&self.wavelength_start_nm.to_le_bytes());
        out.extend_from_slice(&self.wavelength_end_nm.to_le_bytes());
        out.extend_from_slice(&self.width_px.to_le_bytes());
        out.extend_from_slice(&self.num_patterns.to_le_bytes());
        out.extend_from_slice(&self.num_repeats.to_le_bytes());
        out
    }
}

/// One independently parameterized slew section (10 bytes):
/// - 1 byte: section scan type
/// - 1 byte: pattern width in pixels
/// - 2 bytes: wavelength start in nm (u16, little-endian)
/// - 2 bytes: wavelength end in nm (u16, little-endian)
/// - 2 bytes: number of patterns (u16, little-endian)
/// - 2 bytes: exposure time (u16, little-endian)
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct ScanSection {
    pub section_scan_type: u8,
    pub width_px: u8,
    pub wavelength_start_nm: u16,
    pub wavelength_end_nm: u16,
    pub num_patterns: u16,
    pub exposure_time: u16,
}

impl ScanSection {
    /// Appends the 10-byte wire form of the section.
    pub fn encode_into(&self, out: &mut Vec<u8>) {
        out.push(self.section_scan_type);
        out.push(self.width_px);
        out.extend_from_slice(&self.wavelength_start_nm.to_le_bytes());
        out.extend_from_slice(&self.wavelength_end_nm.to_le_bytes());
        out.extend_from_slice(&self.num_patterns.to_le_bytes());
        out.extend_from_slice(&self.exposure_time.to_le_bytes());
    }
}

/// A slew configuration: the common head, one repeat count shared by every
/// section, and the sections in device scan order. The section count is the
/// vector length and is never stored separately.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct SlewScanConfig {
    pub head: ScanConfigHead,
    pub num_repeats: u16,
    pub sections: Vec<ScanSection>,
}

impl SlewScanConfig {
    /// The exact `54 + 10 * N` wire form; inverse of `decode_slew_config`.
    ///
    /// The section count is one byte on the wire, so a config holds at most
    /// 255 sections.
    pub fn encode(&self) -> Vec<u8> {
        debug_assert!(self.sections.len() <= u8::MAX as usize);
        let mut out = Vec::with_capacity(SLEW_HEAD_LEN + SECTION_LEN * self.sections.len());
        self.head.encode_into(&mut out);
        out.extend_from_slice(&self.num_repeats.to_le_bytes());
        out.push(self.sections.len() as u8);
        for section in &self.sections {
            section.encode_into(&mut out);
        }
        out
    }
}

/// A decoded configuration record, tagged by variant.
///
/// The two layouts share one buffer space on the device; they are represented
/// as an explicit tagged union and decoded only after classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanConfig {
    Fixed(FixedScanConfig),
    Slew(SlewScanConfig),
}

impl ScanConfig {
    /// The common head, whichever variant this is.
    pub fn head(&self) -> &ScanConfigHead {
        match self {
            ScanConfig::Fixed(config) => &config.head,
            ScanConfig::Slew(config) => &config.head,
        }
    }

    pub fn variant(&self) -> ConfigVariant {
        match self {
            ScanConfig::Fixed(_) => ConfigVariant::Fixed,
            ScanConfig::Slew(_) => ConfigVariant::Slew,
        }
    }

    /// The wire form of the record; inverse of `decode_config`.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            ScanConfig::Fixed(config) => config.encode(),
            ScanConfig::Slew(config) => config.encode(),
        }
    }
}
