//! Configuration and input handling for Qualimeter
//!
//! This module handles:
//! - Assessment file loading (assessment.toml / .json)
//! - Boundary parsing of raw measurement values
//! - Case-study presets for scaffolding

mod assessment;
mod presets;

pub use assessment::{load_assessment, Assessment, AssessmentError, Measurements};
pub use presets::CasePreset;
