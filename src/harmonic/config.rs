use alloc::vec;
use alloc::vec::Vec;
use micromath::F32Ext;

use crate::error::{Error, Result};

/// Octave jumps on notes younger than this are treated as detector artifacts.
pub const DEFAULT_MAX_ARTIFACT_DURATION_MS: f32 = 40.0;

/// A frequency ratio band around an octave multiple or fraction.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OctaveBand {
    /// The center ratio, for example 2 for one octave up.
    pub ratio: f32,
    /// The maximum distance from `ratio`, exclusive.
    pub tolerance: f32,
}

impl OctaveBand {
    pub const fn new(ratio: f32, tolerance: f32) -> Self {
        OctaveBand { ratio, tolerance }
    }

    /// Indicates if `ratio` lies strictly within the band.
    pub fn contains(&self, ratio: f32) -> bool {
        F32Ext::abs(ratio - self.ratio) < self.tolerance
    }
}

/// Harmonic jump filter parameters.
///
/// The default bands are wider above than below, since detectors are more
/// likely to report a harmonic than a subharmonic.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HarmonicFilterConfig {
    /// Ratios between a new and the current frequency that count as octave jumps.
    pub octave_bands: Vec<OctaveBand>,
    /// Octave jumps are only rejected on notes that have been sounding for
    /// less than this many milliseconds.
    pub max_artifact_duration_ms: f32,
}

impl Default for HarmonicFilterConfig {
    fn default() -> Self {
        HarmonicFilterConfig {
            octave_bands: vec![
                OctaveBand::new(2.0, 0.08),
                OctaveBand::new(0.5, 0.04),
                OctaveBand::new(4.0, 0.15),
                OctaveBand::new(0.25, 0.08),
            ],
            max_artifact_duration_ms: DEFAULT_MAX_ARTIFACT_DURATION_MS,
        }
    }
}

impl HarmonicFilterConfig {
    pub fn validate(&self) -> Result<()> {
        for band in self.octave_bands.iter() {
            if !band.ratio.is_finite() || band.ratio <= 0.0 {
                return Err(Error::InvalidConfig("octave band ratio must be positive"));
            }
            if !band.tolerance.is_finite() || band.tolerance < 0.0 {
                return Err(Error::InvalidConfig(
                    "octave band tolerance must not be negative",
                ));
            }
        }
        if !self.max_artifact_duration_ms.is_finite() || self.max_artifact_duration_ms < 0.0 {
            return Err(Error::InvalidConfig(
                "max artifact duration must not be negative",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_edges_are_exclusive() {
        let band = OctaveBand::new(2.0, 0.5);
        assert!(band.contains(2.0));
        assert!(band.contains(2.25));
        assert!(band.contains(1.75));
        assert!(!band.contains(2.5));
        assert!(!band.contains(1.5));
        assert!(!band.contains(f32::NAN));
    }

    #[test]
    fn test_default_is_valid() {
        let config = HarmonicFilterConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.octave_bands.len(), 4);
        assert_eq!(config.max_artifact_duration_ms, 40.0);
    }

    #[test]
    fn test_invalid_configs() {
        let mut config = HarmonicFilterConfig::default();
        config.octave_bands.push(OctaveBand::new(0.0, 0.1));
        assert!(config.validate().is_err());

        let mut config = HarmonicFilterConfig::default();
        config.octave_bands[0].tolerance = -0.1;
        assert!(config.validate().is_err());

        let mut config = HarmonicFilterConfig::default();
        config.max_artifact_duration_ms = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_partial_config() {
        let config: HarmonicFilterConfig =
            serde_json::from_str(r#"{ "max_artifact_duration_ms": 25.0 }"#).unwrap();
        assert_eq!(config.max_artifact_duration_ms, 25.0);
        assert_eq!(config.octave_bands, HarmonicFilterConfig::default().octave_bands);

        let json = serde_json::to_string(&config).unwrap();
        let parsed: HarmonicFilterConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
