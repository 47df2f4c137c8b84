use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Step budgets for the primary march and the shadow march.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum QualityTier {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityTier {
    pub fn max_steps(self) -> u32 {
        match self {
            QualityTier::Low => 200,
            QualityTier::Medium => 500,
            QualityTier::High => 1000,
        }
    }

    pub fn shadow_steps(self) -> u32 {
        match self {
            QualityTier::Low => 32,
            QualityTier::Medium => 64,
            QualityTier::High => 100,
        }
    }
}

impl fmt::Display for QualityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QualityTier::Low => "low",
            QualityTier::Medium => "medium",
            QualityTier::High => "high",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown quality tier '{0}', expected low, medium or high")]
pub struct UnknownQuality(pub String);

impl FromStr for QualityTier {
    type Err = UnknownQuality;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(QualityTier::Low),
            "medium" | "med" => Ok(QualityTier::Medium),
            "high" => Ok(QualityTier::High),
            _ => Err(UnknownQuality(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarchConfig {
    /// Field samples allowed per ray across all boxes.
    pub max_steps: u32,
    pub max_distance: f32,
    /// A sample closer than this counts as a hit.
    pub surface_threshold: f32,
}

impl Default for MarchConfig {
    fn default() -> Self {
        Self::for_tier(QualityTier::default())
    }
}

impl MarchConfig {
    pub fn for_tier(tier: QualityTier) -> Self {
        Self {
            max_steps: tier.max_steps(),
            max_distance: 30.0,
            surface_threshold: 0.001,
        }
    }

    pub fn fast() -> Self {
        Self::for_tier(QualityTier::Low)
    }

    pub fn high_quality() -> Self {
        Self::for_tier(QualityTier::High)
    }

    pub fn with_max_steps(mut self, max_steps: u32) -> Self {
        self.max_steps = max_steps;
        self
    }

    pub fn with_max_distance(mut self, max_distance: f32) -> Self {
        self.max_distance = max_distance;
        self
    }

    pub fn with_surface_threshold(mut self, threshold: f32) -> Self {
        self.surface_threshold = threshold;
        self
    }
}
