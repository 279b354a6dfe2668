//! Market validation report records.
//!
//! [`ValidationAnalysis`] mirrors the JSON object the validation prompt asks
//! the model for. [`ValidationReport`] is the same analysis tagged with the
//! startup name that was submitted for validation (the model is not asked to
//! echo it back).

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// CompetitionLevel
// ---------------------------------------------------------------------------

/// Competitive pressure in the target market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompetitionLevel {
    #[serde(alias = "low", alias = "LOW")]
    Low,
    #[serde(alias = "medium", alias = "MEDIUM")]
    Medium,
    #[serde(alias = "high", alias = "HIGH")]
    High,
}

impl CompetitionLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Position on the 0-10 competition gauge.
    #[must_use]
    pub const fn gauge_value(self) -> u8 {
        match self {
            Self::Low => 3,
            Self::Medium => 6,
            Self::High => 9,
        }
    }

    /// Bar colour used by the competition gauge.
    #[must_use]
    pub const fn gauge_color(self) -> &'static str {
        match self {
            Self::Low => "green",
            Self::Medium => "orange",
            Self::High => "red",
        }
    }
}

impl fmt::Display for CompetitionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SWOT
// ---------------------------------------------------------------------------

/// Strengths / weaknesses / opportunities / threats.
///
/// Each quadrant accepts either a JSON array of strings or a single string;
/// a single string becomes a one-item list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swot {
    #[serde(deserialize_with = "one_or_many")]
    pub strengths: Vec<String>,
    #[serde(deserialize_with = "one_or_many")]
    pub weaknesses: Vec<String>,
    #[serde(deserialize_with = "one_or_many")]
    pub opportunities: Vec<String>,
    #[serde(deserialize_with = "one_or_many")]
    pub threats: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(item) => vec![item],
        OneOrMany::Many(items) => items,
    })
}

/// Three-year outlook, one free-text projection per year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialProjections {
    pub year_1: String,
    pub year_2: String,
    pub year_3: String,
}

impl FinancialProjections {
    /// Projections labelled `Year 1`..`Year 3`, in order.
    #[must_use]
    pub fn by_year(&self) -> [(&'static str, &str); 3] {
        [
            ("Year 1", self.year_1.as_str()),
            ("Year 2", self.year_2.as_str()),
            ("Year 3", self.year_3.as_str()),
        ]
    }
}

// ---------------------------------------------------------------------------
// Analysis / report
// ---------------------------------------------------------------------------

/// The JSON object returned by the validation prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationAnalysis {
    pub market_opportunity_score: u8,
    pub competition_level: CompetitionLevel,
    pub market_trends: String,
    pub swot: Swot,
    #[serde(rename = "go_to_market", alias = "go_to_market_strategy")]
    pub go_to_market_strategy: String,
    pub financial_projections: FinancialProjections,
    pub risk_assessment: String,
    pub success_probability: u8,
    pub key_metrics: Vec<String>,
    pub recommendations: Vec<String>,
}

impl ValidationAnalysis {
    /// Attach the name of the startup this analysis was requested for.
    #[must_use]
    pub fn into_report(self, startup_name: impl Into<String>) -> ValidationReport {
        ValidationReport {
            startup_name: startup_name.into(),
            market_opportunity_score: self.market_opportunity_score,
            competition_level: self.competition_level,
            market_trends: self.market_trends,
            swot: self.swot,
            go_to_market_strategy: self.go_to_market_strategy,
            financial_projections: self.financial_projections,
            risk_assessment: self.risk_assessment,
            success_probability: self.success_probability,
            key_metrics: self.key_metrics,
            recommendations: self.recommendations,
        }
    }
}

/// Market validation for one startup idea.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub startup_name: String,
    /// Model-assigned, nominally 1-10. Not range-checked.
    pub market_opportunity_score: u8,
    pub competition_level: CompetitionLevel,
    pub market_trends: String,
    pub swot: Swot,
    pub go_to_market_strategy: String,
    pub financial_projections: FinancialProjections,
    pub risk_assessment: String,
    /// Model-assigned, nominally 1-10. Not range-checked.
    pub success_probability: u8,
    pub key_metrics: Vec<String>,
    pub recommendations: Vec<String>,
}
