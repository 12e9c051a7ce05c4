//! Mask code vocabulary shared across the pipeline.
//!
//! Three code spaces meet here: the upstream coarse cloud mask, the
//! upstream surface-water layer, and the final refined mask this library
//! produces. The numeric values of the final codes are a contract with the
//! serialization layer; the ordering of [`CloudClass`] is what the ensemble
//! max-vote relies on.

/// Coarse-mask code meaning "cloud". The only coarse value the ensemble
/// classifier reacts to.
pub const COARSE_CLOUD: u8 = 4;

/// Coarse-mask code meaning "fill" (no valid data).
pub const COARSE_FILL: u8 = 255;

/// Water layer code: water, high confidence.
pub const WATER_HIGH: u8 = 1;

/// Water layer code: water, moderate confidence.
pub const WATER_MODERATE: u8 = 2;

/// Water layer code: partial surface water.
pub const WATER_PARTIAL: u8 = 3;

/// True for any of the three water-confidence codes. All three are treated
/// identically by the compositor.
pub fn is_water_code(code: u8) -> bool {
    (WATER_HIGH..=WATER_PARTIAL).contains(&code)
}

/// Final per-pixel output code of the refined mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum MaskCode {
    /// No cloud detected by either the coarse mask or the ensemble
    Clear = 0,
    /// Flagged by the coarse mask but not confirmed by the ensemble
    PossibleCloud = 1,
    /// Confirmed cloud
    Cloud = 2,
    /// Surface water
    Water = 3,
    /// No valid data
    Fill = 255,
}

impl MaskCode {
    /// The raw output code
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Verdict of a single decision list (and of the whole ensemble).
///
/// The derived ordering (`CloudFree < Cloud`) is load-bearing: the ensemble
/// combines member verdicts by taking the maximum, so any member voting
/// cloud makes the pixel cloud.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CloudClass {
    CloudFree,
    Cloud,
}

impl CloudClass {
    /// Class code as used in the source rule tables (50 / 100).
    pub fn code(self) -> u8 {
        match self {
            CloudClass::CloudFree => 50,
            CloudClass::Cloud => 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cloud_class_ordering() {
        assert!(CloudClass::CloudFree < CloudClass::Cloud);
        assert_eq!(
            CloudClass::CloudFree.max(CloudClass::Cloud),
            CloudClass::Cloud
        );
        assert!(CloudClass::CloudFree.code() < CloudClass::Cloud.code());
    }

    #[test]
    fn test_water_codes() {
        assert!(is_water_code(WATER_HIGH));
        assert!(is_water_code(WATER_MODERATE));
        assert!(is_water_code(WATER_PARTIAL));
        assert!(!is_water_code(0));
        assert!(!is_water_code(4));
        assert!(!is_water_code(COARSE_FILL));
    }

    #[test]
    fn test_mask_codes_distinct() {
        let codes = [
            MaskCode::Clear.code(),
            MaskCode::PossibleCloud.code(),
            MaskCode::Cloud.code(),
            MaskCode::Water.code(),
            MaskCode::Fill.code(),
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in codes.iter().skip(i + 1) {
                assert_ne!(a, b, "output codes must not collide");
            }
        }
    }
}
