use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitDimension {
    Athletic,
    Academic,
    Opportunity,
    Personal,
}

impl FitDimension {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Athletic,
            Self::Academic,
            Self::Opportunity,
            Self::Personal,
        ]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Athletic => "athletic",
            Self::Academic => "academic",
            Self::Opportunity => "opportunity",
            Self::Personal => "personal",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Athletic => "Athletic Fit",
            Self::Academic => "Academic Fit",
            Self::Opportunity => "Opportunity Fit",
            Self::Personal => "Personal Fit",
        }
    }

    /// Entries in [`DIMENSION_MAXIMUMS`] follow declaration order.
    pub fn max_points(self) -> f64 {
        DIMENSION_MAXIMUMS[self as usize].1
    }
}

/// Point ceiling per dimension; the ceilings sum to 100.
pub const DIMENSION_MAXIMUMS: [(FitDimension, f64); 4] = [
    (FitDimension::Athletic, 40.0),
    (FitDimension::Academic, 25.0),
    (FitDimension::Opportunity, 20.0),
    (FitDimension::Personal, 15.0),
];

/// Tier vocabulary. Only `Match`, `Reach` and `Unlikely` come out of
/// [`super::get_fit_tier`]; `Safety` arrives pre-labeled from callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitTier {
    Safety,
    Match,
    Reach,
    Unlikely,
}

impl FitTier {
    pub const fn ordered() -> [Self; 4] {
        [Self::Safety, Self::Match, Self::Reach, Self::Unlikely]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Safety => "Safety",
            Self::Match => "Match",
            Self::Reach => "Reach",
            Self::Unlikely => "Unlikely",
        }
    }

    pub const fn color(self) -> &'static str {
        match self {
            Self::Safety => "#16a34a",
            Self::Match => "#2563eb",
            Self::Reach => "#f59e0b",
            Self::Unlikely => "#dc2626",
        }
    }

    /// Lenient parse for imported data: case and surrounding whitespace are
    /// ignored.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "safety" => Some(Self::Safety),
            "match" => Some(Self::Match),
            "reach" => Some(Self::Reach),
            "unlikely" => Some(Self::Unlikely),
            _ => None,
        }
    }
}

/// Inclusive lower bounds, highest first. Anything below is
/// [`FitTier::Unlikely`].
pub const FIT_TIER_THRESHOLDS: [(f64, FitTier); 2] =
    [(70.0, FitTier::Match), (50.0, FitTier::Reach)];

/// Dimension points supplied by a caller. Absent, negative and non-finite
/// values count as zero; values above a dimension's ceiling are held to it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FitScoreInputs {
    #[serde(default)]
    pub athletic_fit: Option<f64>,
    #[serde(default)]
    pub academic_fit: Option<f64>,
    #[serde(default)]
    pub opportunity_fit: Option<f64>,
    #[serde(default)]
    pub personal_fit: Option<f64>,
}

impl FitScoreInputs {
    pub fn new(athletic: f64, academic: f64, opportunity: f64, personal: f64) -> Self {
        Self {
            athletic_fit: Some(athletic),
            academic_fit: Some(academic),
            opportunity_fit: Some(opportunity),
            personal_fit: Some(personal),
        }
    }

    pub fn get(&self, dimension: FitDimension) -> Option<f64> {
        match dimension {
            FitDimension::Athletic => self.athletic_fit,
            FitDimension::Academic => self.academic_fit,
            FitDimension::Opportunity => self.opportunity_fit,
            FitDimension::Personal => self.personal_fit,
        }
    }

    pub fn set(&mut self, dimension: FitDimension, points: f64) {
        let slot = match dimension {
            FitDimension::Athletic => &mut self.athletic_fit,
            FitDimension::Academic => &mut self.academic_fit,
            FitDimension::Opportunity => &mut self.opportunity_fit,
            FitDimension::Personal => &mut self.personal_fit,
        };
        *slot = Some(points);
    }

    /// Value held to `0..=max` for the dimension.
    pub fn clamped(&self, dimension: FitDimension) -> f64 {
        crate::engine::finite_or_zero(self.get(dimension)).clamp(0.0, dimension.max_points())
    }
}

/// Clamped dimension values that produced a score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FitBreakdown {
    pub athletic_fit: f64,
    pub academic_fit: f64,
    pub opportunity_fit: f64,
    pub personal_fit: f64,
}

impl FitBreakdown {
    pub fn get(&self, dimension: FitDimension) -> f64 {
        match dimension {
            FitDimension::Athletic => self.athletic_fit,
            FitDimension::Academic => self.academic_fit,
            FitDimension::Opportunity => self.opportunity_fit,
            FitDimension::Personal => self.personal_fit,
        }
    }

    pub fn total(&self) -> f64 {
        FitDimension::ordered()
            .into_iter()
            .map(|dimension| self.get(dimension))
            .sum()
    }
}

/// `missing_dimensions` lists every dimension whose clamped value is exactly
/// zero. A genuine zero and an unscored dimension look the same here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FitScoreResult {
    pub score: u32,
    pub tier: FitTier,
    pub breakdown: FitBreakdown,
    pub missing_dimensions: Vec<FitDimension>,
}
