use super::dimensions::{
    academic_fit, athletic_fit, opportunity_fit, personal_fit, AcademicFactors, AthleticFactors,
    OpportunityFactors, PersonalFactors,
};
use super::domain::{
    FitBreakdown, FitDimension, FitScoreInputs, FitScoreResult, FitTier, FIT_TIER_THRESHOLDS,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Three-way classifier. Never yields [`FitTier::Safety`].
pub fn get_fit_tier(score: f64) -> FitTier {
    let score = crate::engine::finite_or_zero(Some(score));
    FIT_TIER_THRESHOLDS
        .iter()
        .find(|(floor, _)| score >= *floor)
        .map(|(_, tier)| *tier)
        .unwrap_or(FitTier::Unlikely)
}

/// Clamps every dimension, sums, and classifies. The tier is taken from the
/// unrounded total; only the reported score is rounded.
pub fn calculate_fit_score(inputs: &FitScoreInputs) -> FitScoreResult {
    let breakdown = FitBreakdown {
        athletic_fit: inputs.clamped(FitDimension::Athletic),
        academic_fit: inputs.clamped(FitDimension::Academic),
        opportunity_fit: inputs.clamped(FitDimension::Opportunity),
        personal_fit: inputs.clamped(FitDimension::Personal),
    };

    let total = breakdown.total().clamp(0.0, 100.0);
    let tier = get_fit_tier(total);
    let missing_dimensions: Vec<FitDimension> = FitDimension::ordered()
        .into_iter()
        .filter(|dimension| breakdown.get(*dimension) == 0.0)
        .collect();

    FitScoreResult {
        score: total.round() as u32,
        tier,
        breakdown,
        missing_dimensions,
    }
}

pub fn fit_score_recommendation(score: u32, tier: FitTier) -> String {
    match tier {
        FitTier::Safety => {
            "Strong likelihood of admission and a roster spot. Keep this school as a dependable option."
                .to_string()
        }
        FitTier::Match => {
            "Excellent fit! This school aligns well with your athletic and academic profile."
                .to_string()
        }
        FitTier::Reach => format!(
            "Fit score of {score} makes this a reach. Strengthen your weakest dimensions and stay in regular contact with the coaching staff."
        ),
        FitTier::Unlikely => {
            "This school is unlikely to be a good fit based on current information. Consider prioritizing other programs."
                .to_string()
        }
    }
}

/// Raw athlete/school attributes grouped by dimension. Sections left out are
/// not scored and surface in `missing_dimensions`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FitAssessment {
    #[serde(default)]
    pub athletic: Option<AthleticFactors>,
    #[serde(default)]
    pub academic: Option<AcademicFactors>,
    #[serde(default)]
    pub opportunity: Option<OpportunityFactors>,
    #[serde(default)]
    pub personal: Option<PersonalFactors>,
}

impl FitAssessment {
    /// Dimension points for every section present.
    pub fn inputs(&self) -> FitScoreInputs {
        let mut inputs = FitScoreInputs::default();
        if let Some(factors) = &self.athletic {
            inputs.set(FitDimension::Athletic, f64::from(athletic_fit(factors)));
        }
        if let Some(factors) = &self.academic {
            inputs.set(FitDimension::Academic, f64::from(academic_fit(factors)));
        }
        if let Some(factors) = &self.opportunity {
            inputs.set(FitDimension::Opportunity, f64::from(opportunity_fit(factors)));
        }
        if let Some(factors) = &self.personal {
            inputs.set(FitDimension::Personal, f64::from(personal_fit(factors)));
        }
        inputs
    }
}

/// Runs the dimension calculators and scores the result.
pub fn assess(assessment: &FitAssessment) -> FitScoreResult {
    let result = calculate_fit_score(&assessment.inputs());

    debug!(
        score = result.score,
        tier = result.tier.label(),
        missing = result.missing_dimensions.len(),
        "assessed school fit"
    );

    result
}
