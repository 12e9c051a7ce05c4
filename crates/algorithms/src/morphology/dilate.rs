//! Morphological dilation (maximum filter)
//!
//! Replaces each pixel with the maximum value in its structuring element
//! neighborhood. On a binary verdict raster a pixel becomes flagged if any
//! neighbor under the element is flagged. Border handling matches erosion:
//! neighbor coordinates clamp at the raster edge.

use skymask_core::raster::Raster;
use skymask_core::{Algorithm, Error, Result};

use super::element::StructuringElement;
use super::erode::morph;

/// Parameters for morphological dilation
#[derive(Debug, Clone, Default)]
pub struct DilateParams {
    /// Structuring element shape
    pub element: StructuringElement,
}

/// Dilation algorithm
#[derive(Debug, Clone, Default)]
pub struct Dilate;

impl Algorithm for Dilate {
    type Input = Raster<u8>;
    type Output = Raster<u8>;
    type Params = DilateParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Dilate"
    }

    fn description(&self) -> &'static str {
        "Morphological dilation (maximum filter over structuring element)"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        dilate(&input, &params.element)
    }
}

/// Perform morphological dilation on a mask raster.
///
/// Each output pixel is the maximum value within the structuring element
/// neighborhood, with neighbor coordinates clamped at the raster edge.
pub fn dilate(raster: &Raster<u8>, element: &StructuringElement) -> Result<Raster<u8>> {
    morph(raster, element, u8::MIN, |acc, v| acc.max(v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dilate_uniform() {
        let raster = Raster::filled(7, 7, 2u8);
        let result = dilate(&raster, &StructuringElement::Square(1)).unwrap();
        assert_eq!(result.get(3, 3).unwrap(), 2);
        assert_eq!(result.get(0, 0).unwrap(), 2);
    }

    #[test]
    fn test_dilate_grows_single_pixel() {
        let mut raster = Raster::filled(7, 7, 0u8);
        raster.set(3, 3, 2).unwrap();

        let result = dilate(&raster, &StructuringElement::Square(1)).unwrap();
        for r in 2..=4 {
            for c in 2..=4 {
                assert_eq!(result.get(r, c).unwrap(), 2);
            }
        }
        assert_eq!(result.get(1, 3).unwrap(), 0);
    }

    #[test]
    fn test_dilate_diamond_excludes_diagonals() {
        let mut raster = Raster::filled(7, 7, 0u8);
        raster.set(3, 3, 2).unwrap();

        let result = dilate(&raster, &StructuringElement::Diamond(1)).unwrap();
        assert_eq!(result.get(2, 3).unwrap(), 2);
        assert_eq!(result.get(3, 2).unwrap(), 2);
        assert_eq!(
            result.get(2, 2).unwrap(),
            0,
            "diamond element must not reach diagonal neighbors"
        );
    }
}
