//! Resume analysis pipeline: extraction, detection, quality heuristics.

pub mod extract;
pub mod keywords;
pub mod profile;
pub mod quality;
pub mod sections;
