//! Decision-list rule engine
//!
//! One generic interpreter evaluates every ensemble member: a decision list
//! is an ordered slice of conjunctive threshold rules plus a default class,
//! evaluated first-match-wins. The rule tables themselves are static data
//! (`tables_variance`, `tables_limited`); nothing here knows which member
//! it is running.

use skymask_core::mask::CloudClass;

use super::feature::FeatureVector;

/// A named per-pixel feature the rule thresholds refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    B1,
    B2,
    B3,
    B4,
    B5,
    B7,
    Ndvi,
    Ndsi,
    B1Var,
    B2Var,
    B4Var,
    B5Var,
    B7Var,
    NdviVar,
    NdsiVar,
}

/// Threshold comparison operator. The choice of closed vs. open side per
/// rule is part of the reference data; boundary values must resolve by the
/// stated operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// feature <= threshold
    Le,
    /// feature > threshold
    Gt,
}

/// A single threshold comparison.
#[derive(Debug, Clone, Copy)]
pub struct Condition {
    pub feature: Feature,
    pub op: Op,
    pub threshold: f64,
}

impl Condition {
    /// Evaluate this condition against a feature vector
    pub fn matches(&self, features: &FeatureVector) -> bool {
        let value = features.get(self.feature);
        match self.op {
            Op::Le => value <= self.threshold,
            Op::Gt => value > self.threshold,
        }
    }
}

/// A conjunction of conditions with a target class.
///
/// The confidence is the empirical training confidence; it is carried for
/// documentation and never consulted at runtime.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub when: &'static [Condition],
    pub class: CloudClass,
    pub confidence: f64,
}

impl Rule {
    /// True if every condition holds (an empty conjunction always holds)
    pub fn matches(&self, features: &FeatureVector) -> bool {
        self.when.iter().all(|c| c.matches(features))
    }
}

/// One ensemble member: an ordered rule list plus a default class.
#[derive(Debug, Clone, Copy)]
pub struct DecisionList {
    pub rules: &'static [Rule],
    pub default: CloudClass,
}

impl DecisionList {
    /// First-match-wins evaluation; the default applies when no rule fires.
    pub fn evaluate(&self, features: &FeatureVector) -> CloudClass {
        for rule in self.rules {
            if rule.matches(features) {
                return rule.class;
            }
        }
        self.default
    }
}

/// `feature <= threshold` condition constructor for the static tables
pub const fn le(feature: Feature, threshold: f64) -> Condition {
    Condition {
        feature,
        op: Op::Le,
        threshold,
    }
}

/// `feature > threshold` condition constructor for the static tables
pub const fn gt(feature: Feature, threshold: f64) -> Condition {
    Condition {
        feature,
        op: Op::Gt,
        threshold,
    }
}

/// Rule constructor for the static tables
pub const fn rule(when: &'static [Condition], class: CloudClass, confidence: f64) -> Rule {
    Rule {
        when,
        class,
        confidence,
    }
}

#[cfg(test)]
mod tests {
    use super::Feature::{Ndsi, B5};
    use super::*;
    use skymask_core::mask::CloudClass::{Cloud, CloudFree};

    fn features_with(b5: f64, ndsi: f64) -> FeatureVector {
        FeatureVector {
            b5,
            ndsi,
            ..FeatureVector::default()
        }
    }

    #[test]
    fn test_first_match_wins() {
        static LIST: DecisionList = DecisionList {
            rules: &[
                rule(&[le(B5, 1005.0)], CloudFree, 0.9),
                // Would also match, but must never be reached
                rule(&[le(B5, 2000.0)], Cloud, 0.9),
            ],
            default: Cloud,
        };

        assert_eq!(LIST.evaluate(&features_with(1000.0, 0.0)), CloudFree);
        assert_eq!(LIST.evaluate(&features_with(1500.0, 0.0)), Cloud);
    }

    #[test]
    fn test_empty_rules_yield_default() {
        static LIST: DecisionList = DecisionList {
            rules: &[],
            default: CloudFree,
        };
        assert_eq!(LIST.evaluate(&features_with(9999.0, 1.0)), CloudFree);
    }

    #[test]
    fn test_boundary_operators() {
        static LIST: DecisionList = DecisionList {
            rules: &[rule(&[le(B5, 1005.0), gt(Ndsi, 0.4)], Cloud, 1.0)],
            default: CloudFree,
        };

        // <= is closed at the threshold, > is open
        assert_eq!(LIST.evaluate(&features_with(1005.0, 0.41)), Cloud);
        assert_eq!(LIST.evaluate(&features_with(1005.0, 0.4)), CloudFree);
        assert_eq!(LIST.evaluate(&features_with(1005.1, 0.41)), CloudFree);
    }

    #[test]
    fn test_conjunction_requires_all_conditions() {
        static LIST: DecisionList = DecisionList {
            rules: &[rule(&[le(B5, 1005.0), gt(Ndsi, 0.4)], Cloud, 1.0)],
            default: CloudFree,
        };
        assert_eq!(LIST.evaluate(&features_with(900.0, 0.1)), CloudFree);
        assert_eq!(LIST.evaluate(&features_with(900.0, 0.5)), Cloud);
    }
}
