//! Calibrated scan results

use bon::Builder;
use itertools::izip;

/// Calibrated scan results, with the uncalibrated intensity retained for
/// diagnostic comparison.
///
/// All three sequences are position-aligned: index `i` in each refers to the
/// same physical sample, and every sequence has length `length`.
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct ScanResults {
    pub wavelength: Vec<f64>,
    pub intensity: Vec<i32>,
    pub uncalibrated_intensity: Vec<i32>,
    pub length: usize,
}

impl ScanResults {
    /// Iterates the aligned (wavelength, intensity, uncalibrated intensity)
    /// triples in sample order.
    pub fn points(&self) -> impl Iterator<Item = (f64, i32, i32)> + '_ {
        izip!(
            &self.wavelength,
            &self.intensity,
            &self.uncalibrated_intensity
        )
        .map(|(wavelength, intensity, uncalibrated)| (*wavelength, *intensity, *uncalibrated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_yields_aligned_triples() {
        let results = ScanResults::builder()
            .wavelength(vec![900.0, 901.5, 903.0])
            .intensity(vec![410, 422, 431])
            .uncalibrated_intensity(vec![400, 415, 419])
            .length(3)
            .build();

        let points: Vec<_> = results.points().collect();
        assert_eq!(
            points,
            vec![(900.0, 410, 400), (901.5, 422, 415), (903.0, 431, 419)]
        );
    }
}
