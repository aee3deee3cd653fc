use crate::types::config::ScanSection;
use winnow::{Parser, binary::le_u8, binary::le_u16, error::ContextError};

/// Parses a single slew section record (10 bytes):
/// - 1 byte: section scan type
/// - 1 byte: pattern width in pixels
/// - 2 bytes: wavelength start in nm (u16, little-endian)
/// - 2 bytes: wavelength end in nm (u16, little-endian)
/// - 2 bytes: number of patterns (u16, little-endian)
/// - 2 bytes: exposure time (u16, little-endian)
pub fn parse_section(input: &mut &[u8]) -> Result<ScanSection, ContextError> {
    let section_scan_type = le_u8.parse_next(input)?;
    let width_px = le_u8.parse_next(input)?;
    let wavelength_start_nm = le_u16.parse_next(input)?;
    let wavelength_end_nm = le_u16.parse_next(input)?;
    let num_patterns = le_u16.parse_next(input)?;
    let exposure_time = le_u16.parse_next(input)?;

    Ok(ScanSection::builder()
        .section_scan_type(section_scan_type)
        .width_px(width_px)
        .wavelength_start_nm(wavelength_start_nm)
        .wavelength_end_nm(wavelength_end_nm)
        .num_patterns(num_patterns)
        .exposure_time(exposure_time)
        .build())
}
