//! High-level access to stored scan configuration blobs

use std::fs::File;
use std::path::{Path, PathBuf};

use log::info;
use memmap2::Mmap;

use crate::error::Result;
use crate::parser::decode_config;
use crate::types::config::ScanConfig;

/// A scan configuration blob loaded from disk.
///
/// Host applications persist the configuration buffers they read off the
/// device; this opens such a blob, decodes it eagerly, and keeps the typed
/// record. The mapping is released once decoding is done.
#[derive(Debug)]
pub struct ScanConfigFile {
    pub path: PathBuf,
    pub config: ScanConfig,
}

impl ScanConfigFile {
    /// Open and decode a stored configuration blob.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Opening scan configuration file: {}", path.display());

        let mmap = map_binary_file(path)?;
        let config = decode_config(&mmap)?;

        Ok(Self {
            path: path.to_path_buf(),
            config,
        })
    }

    /// Get a summary of the configuration contents
    pub fn get_summary(&self) -> String {
        let mut result = String::new();
        let head = self.config.head();

        result.push_str("Configuration:\n");
        result.push_str(&format!("  Name: {}\n", head.config_name_str()));
        result.push_str(&format!("  Serial: {}\n", head.serial_number_str()));
        result.push_str(&format!("  Index: {}\n", head.scan_config_index));

        match &self.config {
            ScanConfig::Fixed(config) => {
                result.push_str(&format!(
                    "  Sweep: {}-{} nm, width {} px, {} patterns x {} repeats\n",
                    config.wavelength_start_nm,
                    config.wavelength_end_nm,
                    config.width_px,
                    config.num_patterns,
                    config.num_repeats
                ));
            }
            ScanConfig::Slew(config) => {
                result.push_str(&format!(
                    "  Sections: {} ({} repeats)\n",
                    config.sections.len(),
                    config.num_repeats
                ));
                for (i, section) in config.sections.iter().enumerate() {
                    result.push_str(&format!(
                        "    Section {}: {}-{} nm, {} patterns, exposure {}\n",
                        i,
                        section.wavelength_start_nm,
                        section.wavelength_end_nm,
                        section.num_patterns,
                        section.exposure_time
                    ));
                }
            }
        }

        result
    }
}

/// Memory-map a stored blob, avoiding a copy of the file contents
fn map_binary_file(path: &Path) -> std::io::Result<Mmap> {
    let file = File::open(path)?;
    // Safety: the file is not modified while the mmap is active
    unsafe { Mmap::map(&file) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScanError;
    use crate::types::config::{ScanSection, SlewScanConfig};
    use crate::types::header::{SLEW_SCAN_TYPE, ScanConfigHead};
    use std::io::Write;

    fn write_temp_blob(name: &str, bytes: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(format!("nanospec-{}-{name}", std::process::id()));
        let mut file = File::create(&path).unwrap();
        file.write_all(bytes).unwrap();
        path
    }

    #[test]
    fn opens_and_summarizes_a_stored_slew_config() {
        let mut config_name = [0u8; 40];
        config_name[..9].copy_from_slice(b"two sweep");
        let config = SlewScanConfig::builder()
            .head(
                ScanConfigHead::builder()
                    .scan_type(SLEW_SCAN_TYPE)
                    .scan_config_index(4)
                    .serial_number(*b"NIR00007")
                    .config_name(config_name)
                    .build(),
            )
            .num_repeats(2)
            .sections(vec![
                ScanSection::builder()
                    .section_scan_type(0)
                    .width_px(128)
                    .wavelength_start_nm(900)
                    .wavelength_end_nm(1300)
                    .num_patterns(2)
                    .exposure_time(10)
                    .build(),
            ])
            .build();

        let path = write_temp_blob("slew.bin", &config.encode());
        let file = ScanConfigFile::open(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(file.config, ScanConfig::Slew(config));
        let summary = file.get_summary();
        assert!(summary.contains("two sweep"));
        assert!(summary.contains("Section 0: 900-1300 nm"));
    }

    #[test]
    fn missing_file_surfaces_as_an_io_error() {
        let path = std::env::temp_dir().join("nanospec-does-not-exist.bin");
        let err = ScanConfigFile::open(&path).unwrap_err();
        assert!(matches!(err, ScanError::Io(_)));
    }
}
