//! # nanospec
//!
//! Decoder and result marshaller for NIR spectrometer scan buffers.
//!
//! The device emits two configuration layouts sharing a common head: a
//! **fixed** configuration describing one contiguous wavelength sweep, and a
//! **slew** configuration holding a variable number of independently
//! parameterized sections. Buffers are classified from the leading scan type
//! byte before any field decoding, decoded into immutable records, and
//! reshaped into the flat parallel-array forms the calling application
//! consumes.
//!
//! Calibrated results are assembled through an injected [`SpectrumLibrary`],
//! the seam standing for the external spectral interpretation library: the
//! raw interpretation runs first, the reference calibration consumes it, and
//! the uncalibrated intensity is kept alongside the calibrated result for
//! diagnostic comparison.

pub mod error;
pub mod marshal;
pub mod parser;
pub mod processing;
pub mod scan_file;
pub mod types;

// Re-export the main types and operations for convenience
pub use error::{Result, ScanError};
pub use parser::{classify, decode_config, decode_fixed_config, decode_slew_config};
pub use processing::{
    InterpretedScan, LibStatus, SpectrumLibrary, assemble_scan_results, read_scan_config,
};
pub use scan_file::ScanConfigFile;
pub use types::{
    config::{ConfigVariant, FixedScanConfig, ScanConfig, ScanSection, SlewScanConfig},
    header::ScanConfigHead,
    results::ScanResults,
};
