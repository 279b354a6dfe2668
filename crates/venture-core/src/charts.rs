//! Chart inputs derived from a [`ValidationReport`].
//!
//! Pure data; rendering lives in the web crate.

use crate::report::{CompetitionLevel, ValidationReport};

/// Upper bound of every score axis.
pub const MAX_SCORE: u8 = 10;

/// One bar of the validation scores chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBar {
    pub label: &'static str,
    /// [`ChartInputs::from_report`] clamps this to `0..=MAX_SCORE`.
    pub score: u8,
}

/// One slice of the SWOT distribution chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwotSlice {
    pub label: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartInputs {
    pub scores: [ScoreBar; 2],
    pub swot: [SwotSlice; 4],
    pub competition: CompetitionLevel,
}

impl ChartInputs {
    #[must_use]
    pub fn from_report(report: &ValidationReport) -> Self {
        let swot = &report.swot;
        Self {
            scores: [
                ScoreBar {
                    label: "Market Opportunity",
                    score: report.market_opportunity_score.min(MAX_SCORE),
                },
                ScoreBar {
                    label: "Success Probability",
                    score: report.success_probability.min(MAX_SCORE),
                },
            ],
            swot: [
                SwotSlice { label: "Strengths", count: swot.strengths.len() },
                SwotSlice { label: "Weaknesses", count: swot.weaknesses.len() },
                SwotSlice { label: "Opportunities", count: swot.opportunities.len() },
                SwotSlice { label: "Threats", count: swot.threats.len() },
            ],
            competition: report.competition_level,
        }
    }

    /// Total SWOT items; zero means the pie has nothing to draw.
    #[must_use]
    pub fn swot_total(&self) -> usize {
        self.swot.iter().map(|slice| slice.count).sum()
    }

    #[must_use]
    pub const fn competition_gauge(&self) -> u8 {
        self.competition.gauge_value()
    }
}
