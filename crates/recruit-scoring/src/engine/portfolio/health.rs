use crate::engine::fit::{get_fit_tier, FitTier};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Lists shorter than this draw a warning.
pub const MIN_RECOMMENDED_SCHOOLS: usize = 5;

const EMPTY_LIST_WARNING: &str =
    "No schools on your list yet. Add schools to start building a balanced portfolio.";
const NO_SAFETY_WARNING: &str =
    "No safety schools on your list. Add at least one program where a roster spot is very likely.";
const NO_MATCH_WARNING: &str =
    "No match schools on your list. Add programs that align well with your athletic and academic profile.";

/// One scored school. A supplied tier wins over the score-derived one, which
/// is the only way a school is counted as a safety.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchoolEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub fit_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fit_tier: Option<FitTier>,
}

impl SchoolEntry {
    pub fn new(fit_score: f64, fit_tier: Option<FitTier>) -> Self {
        Self {
            name: None,
            fit_score,
            fit_tier,
        }
    }

    pub fn tier(&self) -> FitTier {
        self.fit_tier
            .unwrap_or_else(|| get_fit_tier(self.fit_score))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PortfolioStatus {
    NotStarted,
    Healthy,
    NeedsAttention,
    /// Part of the vocabulary, but no rule currently escalates to it.
    AtRisk,
}

impl PortfolioStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::Healthy => "Healthy",
            Self::NeedsAttention => "Needs Attention",
            Self::AtRisk => "At Risk",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortfolioHealth {
    pub reaches: usize,
    pub matches: usize,
    pub safeties: usize,
    pub unlikelies: usize,
    pub total: usize,
    pub warnings: Vec<String>,
    pub status: PortfolioStatus,
}

/// Tallies tiers across the list and flags imbalance. Each rule fires
/// independently; any warning puts the list at `NeedsAttention`.
pub fn calculate_portfolio_health(schools: &[SchoolEntry]) -> PortfolioHealth {
    if schools.is_empty() {
        return PortfolioHealth {
            reaches: 0,
            matches: 0,
            safeties: 0,
            unlikelies: 0,
            total: 0,
            warnings: vec![EMPTY_LIST_WARNING.to_string()],
            status: PortfolioStatus::NotStarted,
        };
    }

    let (mut reaches, mut matches, mut safeties, mut unlikelies) = (0, 0, 0, 0);
    for school in schools {
        match school.tier() {
            FitTier::Reach => reaches += 1,
            FitTier::Match => matches += 1,
            FitTier::Safety => safeties += 1,
            FitTier::Unlikely => unlikelies += 1,
        }
    }
    let total = schools.len();

    let mut warnings = Vec::new();
    if safeties == 0 {
        warnings.push(NO_SAFETY_WARNING.to_string());
    }
    if matches == 0 {
        warnings.push(NO_MATCH_WARNING.to_string());
    }
    if reaches > matches + safeties {
        warnings.push(format!(
            "Too many reach schools ({reaches}) compared to matches and safeties ({}). Balance the list with more realistic options.",
            matches + safeties
        ));
    }
    if total < MIN_RECOMMENDED_SCHOOLS {
        warnings.push(format!(
            "Only {total} school{} on your list. Aim for at least {MIN_RECOMMENDED_SCHOOLS} to keep your options open.",
            if total == 1 { "" } else { "s" }
        ));
    }

    let status = if warnings.is_empty() {
        PortfolioStatus::Healthy
    } else {
        PortfolioStatus::NeedsAttention
    };

    debug!(
        total,
        reaches,
        matches,
        safeties,
        unlikelies,
        warnings = warnings.len(),
        status = status.label(),
        "analyzed portfolio health"
    );

    PortfolioHealth {
        reaches,
        matches,
        safeties,
        unlikelies,
        total,
        warnings,
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiered(tier: FitTier, count: usize) -> Vec<SchoolEntry> {
        (0..count)
            .map(|_| SchoolEntry::new(0.0, Some(tier)))
            .collect()
    }

    #[test]
    fn empty_list_is_not_started_with_single_warning() {
        let health = calculate_portfolio_health(&[]);
        assert_eq!(health.status, PortfolioStatus::NotStarted);
        assert_eq!(health.warnings.len(), 1);
        assert_eq!(
            (health.reaches, health.matches, health.safeties, health.unlikelies, health.total),
            (0, 0, 0, 0, 0)
        );
    }

    #[test]
    fn all_matches_still_needs_attention_for_missing_safeties() {
        let health = calculate_portfolio_health(&tiered(FitTier::Match, 6));
        assert_eq!(health.matches, 6);
        assert_eq!(health.status, PortfolioStatus::NeedsAttention);
        assert_eq!(health.warnings, vec![NO_SAFETY_WARNING.to_string()]);
    }

    #[test]
    fn balanced_list_is_healthy() {
        let mut schools = tiered(FitTier::Safety, 2);
        schools.extend(tiered(FitTier::Match, 2));
        schools.extend(tiered(FitTier::Reach, 2));
        let health = calculate_portfolio_health(&schools);
        assert_eq!(health.status, PortfolioStatus::Healthy);
        assert!(health.warnings.is_empty());
        assert_eq!(health.total, 6);
    }

    #[test]
    fn rules_fire_independently() {
        let health = calculate_portfolio_health(&tiered(FitTier::Reach, 3));
        assert_eq!(health.status, PortfolioStatus::NeedsAttention);
        assert_eq!(health.warnings.len(), 4);
        assert!(health.warnings[2].contains("(3)"));
        assert!(health.warnings[3].starts_with("Only 3 schools"));
    }

    #[test]
    fn missing_tiers_are_derived_from_score() {
        let schools = vec![
            SchoolEntry::new(82.0, None),
            SchoolEntry::new(55.0, None),
            SchoolEntry::new(12.0, None),
            SchoolEntry::new(30.0, Some(FitTier::Safety)),
        ];
        let health = calculate_portfolio_health(&schools);
        assert_eq!(health.matches, 1);
        assert_eq!(health.reaches, 1);
        assert_eq!(health.unlikelies, 1);
        assert_eq!(health.safeties, 1);
        assert_eq!(health.warnings.len(), 1);
        assert!(health.warnings[0].starts_with("Only 4 schools"));
    }

    #[test]
    fn single_school_warning_uses_singular() {
        let health = calculate_portfolio_health(&tiered(FitTier::Safety, 1));
        assert!(health
            .warnings
            .iter()
            .any(|warning| warning.starts_with("Only 1 school on")));
    }

    #[test]
    fn at_risk_is_never_produced() {
        for reaches in 0..4 {
            for matches in 0..4 {
                let mut schools = tiered(FitTier::Reach, reaches);
                schools.extend(tiered(FitTier::Match, matches));
                let health = calculate_portfolio_health(&schools);
                assert_ne!(health.status, PortfolioStatus::AtRisk);
            }
        }
    }
}
