//! Flat external forms for decoded records
//!
//! Pure reshaping of the typed records into the fixed-width byte arrays and
//! parallel typed arrays the calling application consumes. No validation
//! happens here; inputs are assumed to already satisfy the record invariants,
//! and field order and index alignment are preserved.

use crate::types::config::{FixedScanConfig, ScanConfig, SlewScanConfig};
use crate::types::header::{CONFIG_NAME_LEN, SERIAL_NUMBER_LEN};
use crate::types::results::ScanResults;

/// Flat form of a fixed scan configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedConfigExport {
    pub scan_type: i32,
    pub scan_config_index: i32,
    pub serial_number: [u8; SERIAL_NUMBER_LEN],
    pub config_name: [u8; CONFIG_NAME_LEN],
    pub wavelength_start_nm: i32,
    pub wavelength_end_nm: i32,
    pub width_px: i32,
    pub num_patterns: i32,
    pub num_repeats: i32,
}

/// Flat form of a slew scan configuration: seven parallel arrays, each of
/// length `num_sections`, indexed by section position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlewConfigExport {
    pub scan_type: i32,
    pub scan_config_index: i32,
    pub serial_number: [u8; SERIAL_NUMBER_LEN],
    pub config_name: [u8; CONFIG_NAME_LEN],
    pub num_sections: u8,
    pub section_scan_types: Vec<u8>,
    pub section_widths_px: Vec<u8>,
    pub section_wavelength_start_nm: Vec<i32>,
    pub section_wavelength_end_nm: Vec<i32>,
    pub section_num_patterns: Vec<i32>,
    pub section_num_repeats: Vec<i32>,
    pub section_exposure_times: Vec<i32>,
}

/// Flat form of a configuration record, one shape per variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigExport {
    Fixed(FixedConfigExport),
    Slew(SlewConfigExport),
}

/// Flat form of assembled scan results.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanResultsExport {
    pub wavelength: Vec<f64>,
    pub intensity: Vec<i32>,
    pub uncalibrated_intensity: Vec<i32>,
    pub length: i32,
}

/// Converts a configuration record into its flat external form.
///
/// The slew shape replicates the head's shared repeat count into the
/// per-section repeats array.
pub fn export_config(config: &ScanConfig) -> ConfigExport {
    match config {
        ScanConfig::Fixed(config) => ConfigExport::Fixed(export_fixed_config(config)),
        ScanConfig::Slew(config) => ConfigExport::Slew(export_slew_config(config)),
    }
}

fn export_fixed_config(config: &FixedScanConfig) -> FixedConfigExport {
    FixedConfigExport {
        scan_type: config.head.scan_type as i32,
        scan_config_index: config.head.scan_config_index as i32,
        serial_number: config.head.serial_number,
        config_name: config.head.config_name,
        wavelength_start_nm: config.wavelength_start_nm as i32,
        wavelength_end_nm: config.wavelength_end_nm as i32,
        width_px: config.width_px as i32,
        num_patterns: config.num_patterns as i32,
        num_repeats: config.num_repeats as i32,
    }
}

fn export_slew_config(config: &SlewScanConfig) -> SlewConfigExport {
    let num_sections = config.sections.len();
    let mut export = SlewConfigExport {
        scan_type: config.head.scan_type as i32,
        scan_config_index: config.head.scan_config_index as i32,
        serial_number: config.head.serial_number,
        config_name: config.head.config_name,
        num_sections: num_sections as u8,
        section_scan_types: Vec::with_capacity(num_sections),
        section_widths_px: Vec::with_capacity(num_sections),
        section_wavelength_start_nm: Vec::with_capacity(num_sections),
        section_wavelength_end_nm: Vec::with_capacity(num_sections),
        section_num_patterns: Vec::with_capacity(num_sections),
        section_num_repeats: Vec::with_capacity(num_sections),
        section_exposure_times: Vec::with_capacity(num_sections),
    };

    for section in &config.sections {
        export.section_scan_types.push(section.section_scan_type);
        export.section_widths_px.push(section.width_px);
        export
            .section_wavelength_start_nm
            .push(section.wavelength_start_nm as i32);
        export
            .section_wavelength_end_nm
            .push(section.wavelength_end_nm as i32);
        export.section_num_patterns.push(section.num_patterns as i32);
        export.section_num_repeats.push(config.num_repeats as i32);
        export
            .section_exposure_times
            .push(section.exposure_time as i32);
    }

    export
}

/// Converts assembled scan results into their flat external form.
pub fn export_results(results: &ScanResults) -> ScanResultsExport {
    ScanResultsExport {
        wavelength: results.wavelength.clone(),
        intensity: results.intensity.clone(),
        uncalibrated_intensity: results.uncalibrated_intensity.clone(),
        length: results.length as i32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::config::ScanSection;
    use crate::types::header::{SLEW_SCAN_TYPE, ScanConfigHead};

    fn sample_head(scan_type: u8) -> ScanConfigHead {
        let mut serial_number = [0u8; SERIAL_NUMBER_LEN];
        serial_number[..6].copy_from_slice(b"SN1234");
        let mut config_name = [0u8; CONFIG_NAME_LEN];
        config_name[..6].copy_from_slice(b"barley");
        ScanConfigHead::builder()
            .scan_type(scan_type)
            .scan_config_index(9)
            .serial_number(serial_number)
            .config_name(config_name)
            .build()
    }

    fn section(scan_type: u8, width_px: u8, start: u16, end: u16) -> ScanSection {
        ScanSection::builder()
            .section_scan_type(scan_type)
            .width_px(width_px)
            .wavelength_start_nm(start)
            .wavelength_end_nm(end)
            .num_patterns(2)
            .exposure_time(10)
            .build()
    }

    #[test]
    fn fixed_export_carries_every_scalar_and_both_byte_fields() {
        let config = ScanConfig::Fixed(
            FixedScanConfig::builder()
                .head(sample_head(1))
                .wavelength_start_nm(900)
                .wavelength_end_nm(1700)
                .width_px(256)
                .num_patterns(4)
                .num_repeats(2)
                .build(),
        );

        let export = match export_config(&config) {
            ConfigExport::Fixed(export) => export,
            other => panic!("expected fixed export, got {other:?}"),
        };

        assert_eq!(export.scan_type, 1);
        assert_eq!(export.scan_config_index, 9);
        assert_eq!(export.serial_number, config.head().serial_number);
        assert_eq!(export.config_name, config.head().config_name);
        assert_eq!(
            (
                export.wavelength_start_nm,
                export.wavelength_end_nm,
                export.width_px,
                export.num_patterns,
                export.num_repeats,
            ),
            (900, 1700, 256, 4, 2)
        );
    }

    #[test]
    fn slew_export_builds_seven_aligned_arrays() {
        let config = SlewScanConfig::builder()
            .head(sample_head(SLEW_SCAN_TYPE))
            .num_repeats(6)
            .sections(vec![
                section(0, 128, 900, 1300),
                section(1, 64, 1300, 1500),
                section(0, 32, 1500, 1700),
            ])
            .build();

        let export = export_slew_config(&config);

        assert_eq!(export.num_sections, 3);
        assert_eq!(export.section_scan_types.len(), 3);
        assert_eq!(export.section_widths_px.len(), 3);
        assert_eq!(export.section_wavelength_start_nm.len(), 3);
        assert_eq!(export.section_wavelength_end_nm.len(), 3);
        assert_eq!(export.section_num_patterns.len(), 3);
        assert_eq!(export.section_num_repeats.len(), 3);
        assert_eq!(export.section_exposure_times.len(), 3);

        // Index i across all seven arrays refers to section i.
        assert_eq!(export.section_scan_types, vec![0, 1, 0]);
        assert_eq!(export.section_widths_px, vec![128, 64, 32]);
        assert_eq!(
            export.section_wavelength_start_nm,
            vec![900, 1300, 1500]
        );
        assert_eq!(export.section_wavelength_end_nm, vec![1300, 1500, 1700]);

        // The shared head repeat count is replicated per section.
        assert_eq!(export.section_num_repeats, vec![6, 6, 6]);
    }

    #[test]
    fn empty_slew_config_exports_seven_empty_arrays() {
        let config = SlewScanConfig::builder()
            .head(sample_head(SLEW_SCAN_TYPE))
            .num_repeats(1)
            .sections(Vec::new())
            .build();

        let export = export_slew_config(&config);
        assert_eq!(export.num_sections, 0);
        assert!(export.section_scan_types.is_empty());
        assert!(export.section_widths_px.is_empty());
        assert!(export.section_wavelength_start_nm.is_empty());
        assert!(export.section_wavelength_end_nm.is_empty());
        assert!(export.section_num_patterns.is_empty());
        assert!(export.section_num_repeats.is_empty());
        assert!(export.section_exposure_times.is_empty());
    }

    #[test]
    fn results_export_preserves_alignment_and_length() {
        let results = ScanResults::builder()
            .wavelength(vec![900.0, 901.0])
            .intensity(vec![10, 11])
            .uncalibrated_intensity(vec![9, 10])
            .length(2)
            .build();

        let export = export_results(&results);
        assert_eq!(export.length, 2);
        assert_eq!(export.wavelength, results.wavelength);
        assert_eq!(export.intensity, results.intensity);
        assert_eq!(export.uncalibrated_intensity, results.uncalibrated_intensity);
    }
}
