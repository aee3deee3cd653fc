//! Type definitions for the scan configuration and result records

pub mod config;
pub mod header;
pub mod results;

// Re-export the main types for convenience
pub use config::{ConfigVariant, FixedScanConfig, ScanConfig, ScanSection, SlewScanConfig};
pub use header::ScanConfigHead;
pub use results::ScanResults;
