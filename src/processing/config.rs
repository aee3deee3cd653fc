//! Validated configuration reading through the spectral library

use crate::error::Result;
use crate::parser::decode_config;
use crate::processing::interpreter::SpectrumLibrary;
use crate::types::config::ScanConfig;

/// Reads a configuration buffer: the spectral library first validates its
/// structural integrity, then the buffer is decoded into a typed record.
pub fn read_scan_config(lib: &impl SpectrumLibrary, data: &[u8]) -> Result<ScanConfig> {
    lib.read_configuration(data)?;
    decode_config(data)
}
