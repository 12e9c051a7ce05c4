//! Rule-based ensemble cloud classifier
//!
//! Ten independently trained decision lists, five per mode, evaluated by a
//! single generic interpreter:
//! - **rules**: conditions, rules, decision lists and their evaluator
//! - **feature**: the per-pixel feature vector and its domain contract
//! - **tables**: the static reference rule data for both modes
//! - **ensemble**: max-vote combination and whole-scene classification

mod ensemble;
mod feature;
mod rules;
mod tables_limited;
mod tables_variance;

pub use ensemble::{
    classify, classify_scene, members, vote, EnsembleMode, SceneFeatures, SceneVariances,
};
pub use feature::FeatureVector;
pub use rules::{Condition, DecisionList, Feature, Op, Rule};
pub use tables_limited::LIMITED_MEMBERS;
pub use tables_variance::VARIANCE_MEMBERS;
