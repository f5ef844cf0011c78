//! Dynamic prompt generation engine
//!
//! The pipeline behind `sg generate`: resolve the archetype's template
//! descriptor, pick the best variant for the caller, render its body
//! through the template mini-language, score context richness, and
//! return one structured result.
//!
//! - [`registry`] - archetype catalog and descriptor cache
//! - [`template`] - the template mini-language (parse + evaluate)
//! - [`selector`] - variant selection and feedback weights
//! - [`score`] - confidence heuristic
//! - [`intent`] - description-to-intent analysis
//! - [`generator`] - the facade tying it together

pub mod context;
pub mod error;
pub mod generator;
pub mod intent;
pub mod registry;
pub mod score;
pub mod selector;
pub mod template;
