//! Structuring element definitions for morphological operations
//!
//! A structuring element defines the neighborhood shape used by erosion,
//! dilation and the distance-buffering operator.

use skymask_core::{Error, Result};

/// Shape of a structuring element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructuringElement {
    /// Square element of given radius (side = 2*radius + 1)
    Square(usize),
    /// Diamond element of given radius: cells within `radius` steps at
    /// right angles (no diagonals). Radius 0 is the center-only element.
    Diamond(usize),
}

impl Default for StructuringElement {
    fn default() -> Self {
        // 5x5, the reference element for verdict cleanup
        StructuringElement::Square(2)
    }
}

impl StructuringElement {
    /// Validate the structuring element, returning an error for invalid
    /// configurations
    pub fn validate(&self) -> Result<()> {
        match self {
            StructuringElement::Square(0) => Err(Error::InvalidParameter {
                name: "radius",
                value: "0".to_string(),
                reason: "square structuring element radius must be at least 1".to_string(),
            }),
            _ => Ok(()),
        }
    }

    /// Get the radius of the structuring element
    pub fn radius(&self) -> usize {
        match self {
            StructuringElement::Square(r) | StructuringElement::Diamond(r) => *r,
        }
    }

    /// Compute (dr, dc) offsets relative to center for all active cells.
    ///
    /// The diamond is built row by row the way the reference stencil is:
    /// stencil row `r` of a radius-`d` element fills `d - |d - r|` cells
    /// on either side of the center column. For a radius of 3:
    ///
    /// ```text
    /// 0 0 0 1 0 0 0
    /// 0 0 1 1 1 0 0
    /// 0 1 1 1 1 1 0
    /// 1 1 1 x 1 1 1
    /// 0 1 1 1 1 1 0
    /// 0 0 1 1 1 0 0
    /// 0 0 0 1 0 0 0
    /// ```
    pub fn offsets(&self) -> Vec<(isize, isize)> {
        let mut offsets = Vec::new();
        match self {
            StructuringElement::Square(r) => {
                let r = *r as isize;
                for dr in -r..=r {
                    for dc in -r..=r {
                        offsets.push((dr, dc));
                    }
                }
            }
            StructuringElement::Diamond(d) => {
                let d = *d as isize;
                for row in 0..=2 * d {
                    let nfill = d - (d - row).abs();
                    for dc in -nfill..=nfill {
                        offsets.push((row - d, dc));
                    }
                }
            }
        }
        offsets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_offsets() {
        let se = StructuringElement::Square(1);
        let offsets = se.offsets();
        assert_eq!(offsets.len(), 9);
        assert!(offsets.contains(&(0, 0)));
        assert!(offsets.contains(&(-1, -1)));
        assert!(offsets.contains(&(1, 1)));
    }

    #[test]
    fn test_diamond_offsets() {
        let se = StructuringElement::Diamond(1);
        let offsets = se.offsets();
        // Center + 4 right-angle neighbors
        assert_eq!(offsets.len(), 5);
        assert!(offsets.contains(&(0, 0)));
        assert!(offsets.contains(&(-1, 0)));
        assert!(offsets.contains(&(0, 1)));
        assert!(!offsets.contains(&(-1, -1)));
    }

    #[test]
    fn test_diamond_offsets_radius_three() {
        // 1 + 3 + 5 + 7 + 5 + 3 + 1 cells, per the reference stencil
        let offsets = StructuringElement::Diamond(3).offsets();
        assert_eq!(offsets.len(), 25);
        assert!(offsets.contains(&(-3, 0)));
        assert!(offsets.contains(&(0, -3)));
        assert!(offsets.contains(&(1, 2)));
        assert!(!offsets.contains(&(-3, 1)));
        assert!(!offsets.contains(&(2, 2)));
    }

    #[test]
    fn test_diamond_radius_zero_is_center_only() {
        assert_eq!(StructuringElement::Diamond(0).offsets(), vec![(0, 0)]);
    }

    #[test]
    fn test_validate_zero_radius_square() {
        assert!(StructuringElement::Square(0).validate().is_err());
        assert!(StructuringElement::Diamond(0).validate().is_ok());
    }

    #[test]
    fn test_default() {
        let se = StructuringElement::default();
        assert_eq!(se, StructuringElement::Square(2));
        assert_eq!(se.radius(), 2);
        assert_eq!(se.offsets().len(), 25);
    }
}
