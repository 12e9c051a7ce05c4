//! Morphological opening (erosion followed by dilation)
//!
//! Suppresses speckle in the binary cloud verdict: flagged regions smaller
//! than the structuring element disappear, larger regions keep their
//! shape. Erosion writes to its own intermediate buffer and dilation reads
//! that intermediate; neither pass mutates its input.

use skymask_core::raster::Raster;
use skymask_core::{Algorithm, Error, Result};

use super::dilate::dilate;
use super::element::StructuringElement;
use super::erode::erode;

/// Parameters for morphological opening
#[derive(Debug, Clone, Default)]
pub struct OpeningParams {
    /// Structuring element shape
    pub element: StructuringElement,
}

/// Opening algorithm
#[derive(Debug, Clone, Default)]
pub struct Opening;

impl Algorithm for Opening {
    type Input = Raster<u8>;
    type Output = Raster<u8>;
    type Params = OpeningParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Opening"
    }

    fn description(&self) -> &'static str {
        "Morphological opening (erosion then dilation) to remove small flagged regions"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        opening(&input, &params.element)
    }
}

/// Perform a single one-pass morphological opening on a mask raster.
///
/// The default element is the 5x5 square used for cloud-verdict cleanup.
pub fn opening(raster: &Raster<u8>, element: &StructuringElement) -> Result<Raster<u8>> {
    let eroded = erode(raster, element)?;
    dilate(&eroded, element)
}

#[cfg(test)]
mod tests {
    use super::*;
    use skymask_core::mask::MaskCode;

    fn cloud() -> u8 {
        MaskCode::Cloud.code()
    }

    #[test]
    fn test_opening_removes_isolated_pixel() {
        let mut raster = Raster::filled(11, 11, 0u8);
        raster.set(5, 5, cloud()).unwrap();

        let result = opening(&raster, &StructuringElement::default()).unwrap();
        for r in 0..11 {
            for c in 0..11 {
                assert_eq!(
                    result.get(r, c).unwrap(),
                    0,
                    "a single flagged pixel must be erased at ({}, {})",
                    r,
                    c
                );
            }
        }
    }

    #[test]
    fn test_opening_preserves_large_region() {
        let mut raster = Raster::filled(13, 13, 0u8);
        for r in 3..10 {
            for c in 3..10 {
                raster.set(r, c, cloud()).unwrap();
            }
        }

        let result = opening(&raster, &StructuringElement::default()).unwrap();
        // A 7x7 block survives a 5x5 opening intact
        for r in 3..10 {
            for c in 3..10 {
                assert_eq!(result.get(r, c).unwrap(), cloud());
            }
        }
        assert_eq!(result.get(2, 6).unwrap(), 0);
    }

    #[test]
    fn test_opening_idempotent() {
        let mut raster = Raster::filled(15, 15, 0u8);
        // A mix of a large block, a thin protrusion and speckle
        for r in 4..11 {
            for c in 4..11 {
                raster.set(r, c, cloud()).unwrap();
            }
        }
        raster.set(4, 12, cloud()).unwrap();
        raster.set(13, 2, cloud()).unwrap();

        let element = StructuringElement::default();
        let once = opening(&raster, &element).unwrap();
        let twice = opening(&once, &element).unwrap();
        assert_eq!(
            once.data(),
            twice.data(),
            "opening an already-opened raster must be a no-op"
        );
    }

    #[test]
    fn test_opening_does_not_mutate_input() {
        let mut raster = Raster::filled(9, 9, 0u8);
        raster.set(4, 4, cloud()).unwrap();

        let _ = opening(&raster, &StructuringElement::default()).unwrap();
        assert_eq!(raster.get(4, 4).unwrap(), cloud());
    }
}
