//! Boundary with the external spectral interpretation library

use bon::Builder;

use crate::error::ScanError;

/// Non-success status code reported by the spectral library.
///
/// The code is opaque to this crate; it is carried into
/// `ScanError::InterpretationFailed` unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LibStatus(pub i32);

impl From<LibStatus> for ScanError {
    fn from(status: LibStatus) -> Self {
        ScanError::InterpretationFailed { status: status.0 }
    }
}

/// Samples produced by one interpretation call.
///
/// `length` is the library-reported sample count. Implementations keep both
/// vectors at exactly that length, and a reference interpretation never
/// reports more samples than the raw scan it was given.
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct InterpretedScan {
    pub wavelength: Vec<f64>,
    pub intensity: Vec<i32>,
    pub length: usize,
}

/// The external spectral interpretation library.
///
/// The spectral calibration math lives outside this crate; this trait is the
/// seam that lets the decoder and assembler run against a fake in tests. All
/// buffers are opaque pass-throughs whose internal layout this crate does not
/// interpret.
pub trait SpectrumLibrary {
    /// Interprets serialized scan data into raw, uncalibrated samples.
    fn interpret_raw(&self, data: &[u8]) -> Result<InterpretedScan, LibStatus>;

    /// Applies reference calibration to a raw interpretation, given the
    /// serialized coefficients and calibration matrix.
    fn interpret_with_reference(
        &self,
        coeff: &[u8],
        matrix: &[u8],
        raw: &InterpretedScan,
    ) -> Result<InterpretedScan, LibStatus>;

    /// Validates the structural integrity of a configuration buffer.
    fn read_configuration(&self, data: &[u8]) -> Result<(), LibStatus>;
}
