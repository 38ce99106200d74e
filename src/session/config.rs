use crate::error::Result;
use crate::harmonic::HarmonicFilterConfig;

/// Session parameters.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SessionConfig {
    pub filter: HarmonicFilterConfig,
}

impl SessionConfig {
    pub fn validate(&self) -> Result<()> {
        self.filter.validate()
    }
}
