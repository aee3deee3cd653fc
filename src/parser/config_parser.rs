//! Variant detection and top-level configuration decoding

use log::debug;
use winnow::{Parser, binary::le_u8, binary::le_u16, combinator::repeat};

use crate::error::{Result, ScanError};
use crate::parser::header_parser::parse_config_head;
use crate::parser::section_parser::parse_section;
use crate::types::config::{
    ConfigVariant, FIXED_CONFIG_LEN, FixedScanConfig, SECTION_LEN, SLEW_HEAD_LEN, ScanConfig,
    ScanSection, SlewScanConfig,
};
use crate::types::header::{CONFIG_HEAD_LEN, SLEW_SCAN_TYPE};

/// Classifies a configuration buffer as fixed or slew.
///
/// Only the leading scan type byte is inspected; no field decoding happens
/// before classification, so a misclassification can never leave
/// partially-decoded state behind.
pub fn classify(input: &[u8]) -> Result<ConfigVariant> {
    if input.len() < CONFIG_HEAD_LEN {
        return Err(ScanError::MalformedHeader {
            expected: CONFIG_HEAD_LEN,
            actual: input.len(),
        });
    }
    if input[0] == SLEW_SCAN_TYPE {
        Ok(ConfigVariant::Slew)
    } else {
        Ok(ConfigVariant::Fixed)
    }
}

/// Decodes a configuration buffer, dispatching on the classified variant.
pub fn decode_config(input: &[u8]) -> Result<ScanConfig> {
    let variant = classify(input)?;
    debug!("Classified {}-byte configuration buffer as {variant:?}", input.len());
    match variant {
        ConfigVariant::Fixed => decode_fixed_config(input).map(ScanConfig::Fixed),
        ConfigVariant::Slew => decode_slew_config(input).map(ScanConfig::Slew),
    }
}

/// Decodes a fixed scan configuration record.
///
/// The buffer must hold at least the full 61-byte record; trailing bytes
/// beyond it are ignored (device buffers are padded to the containing union
/// size).
pub fn decode_fixed_config(input: &[u8]) -> Result<FixedScanConfig> {
    if input.len() < FIXED_CONFIG_LEN {
        return Err(ScanError::TruncatedBuffer {
            expected: FIXED_CONFIG_LEN,
            actual: input.len(),
        });
    }
    let truncated = |_| ScanError::TruncatedBuffer {
        expected: FIXED_CONFIG_LEN,
        actual: input.len(),
    };

    let mut rest = input;
    let head = parse_config_head(&mut rest).map_err(truncated)?;
    let wavelength_start_nm = le_u16.parse_next(&mut rest).map_err(truncated)?;
    let wavelength_end_nm = le_u16.parse_next(&mut rest).map_err(truncated)?;
    let width_px = le_u16.parse_next(&mut rest).map_err(truncated)?;
    let num_patterns = le_u16.parse_next(&mut rest).map_err(truncated)?;
    let num_repeats = le_u16.parse_next(&mut rest).map_err(truncated)?;

    Ok(FixedScanConfig::builder()
        .head(head)
        .wavelength_start_nm(wavelength_start_nm)
        .wavelength_end_nm(wavelength_end_nm)
        .width_px(width_px)
        .num_patterns(num_patterns)
        .num_repeats(num_repeats)
        .build())
}

/// Decodes a slew scan configuration record.
///
/// The declared section count must be consistent with the buffer length: the
/// buffer holds exactly `54 + 10 * N` bytes. A count of zero is a valid
/// configuration with no sections. Sections are decoded in buffer order,
/// which is scan order on the device.
pub fn decode_slew_config(input: &[u8]) -> Result<SlewScanConfig> {
    if input.len() < SLEW_HEAD_LEN {
        return Err(ScanError::TruncatedBuffer {
            expected: SLEW_HEAD_LEN,
            actual: input.len(),
        });
    }
    let num_sections = input[SLEW_HEAD_LEN - 1] as usize;
    let expected = SLEW_HEAD_LEN + SECTION_LEN * num_sections;
    if input.len() != expected {
        return Err(ScanError::SectionCountMismatch {
            num_sections,
            expected,
            actual: input.len(),
        });
    }
    let mismatch = |_| ScanError::SectionCountMismatch {
        num_sections,
        expected,
        actual: input.len(),
    };

    let mut rest = input;
    let head = parse_config_head(&mut rest).map_err(mismatch)?;
    let num_repeats = le_u16.parse_next(&mut rest).map_err(mismatch)?;
    let _ = le_u8.parse_next(&mut rest).map_err(mismatch)?;
    let sections: Vec<ScanSection> = repeat(num_sections, parse_section)
        .parse_next(&mut rest)
        .map_err(mismatch)?;

    debug!("Decoded slew scan config with {} sections", sections.len());

    Ok(SlewScanConfig::builder()
        .head(head)
        .num_repeats(num_repeats)
        .sections(sections)
        .build())
}
