//! Assembly of calibrated scan results

use log::debug;

use crate::error::Result;
use crate::processing::interpreter::SpectrumLibrary;
use crate::types::results::ScanResults;

/// Assembles calibrated scan results from serialized scan data and
/// calibration inputs.
///
/// The raw interpretation runs first; the reference interpretation then
/// consumes its output. The calibration step's reported length is
/// authoritative for all three output sequences, with the uncalibrated
/// intensity drawn from the same sample positions of the raw result. A
/// non-success status from either library call fails the whole operation —
/// no partial result is ever returned.
pub fn assemble_scan_results(
    lib: &impl SpectrumLibrary,
    data: &[u8],
    coeff: &[u8],
    matrix: &[u8],
) -> Result<ScanResults> {
    let raw = lib.interpret_raw(data)?;
    let calibrated = lib.interpret_with_reference(coeff, matrix, &raw)?;

    let length = calibrated.length;
    let mut uncalibrated_intensity = raw.intensity;
    uncalibrated_intensity.truncate(length);

    debug!("Assembled scan results with {length} samples");

    Ok(ScanResults::builder()
        .wavelength(calibrated.wavelength)
        .intensity(calibrated.intensity)
        .uncalibrated_intensity(uncalibrated_intensity)
        .length(length)
        .build())
}
