//! # venture-core
//!
//! Record types shared across Venture crates.
//!
//! - [`StartupIdea`]: one brainstormed idea as returned by the model
//! - [`ValidationReport`]: market-validation analysis for a single idea
//! - Option lists offered by the idea form ([`options`])
//! - Chart inputs derived from a report ([`charts`])
//!
//! Records are produced by decoding model output and are never mutated
//! afterwards. The decoders list every required field explicitly, so a
//! missing or mistyped field fails the whole decode.

pub mod charts;
pub mod idea;
pub mod options;
pub mod report;

pub use charts::{ChartInputs, ScoreBar, SwotSlice};
pub use idea::{IdeaBatch, StartupIdea};
pub use report::{CompetitionLevel, FinancialProjections, Swot, ValidationAnalysis, ValidationReport};
