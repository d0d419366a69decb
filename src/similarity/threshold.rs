use serde::{Deserialize, Serialize};

use crate::errors::PlagiarismError;

pub const DEFAULT_THRESHOLD: f64 = 0.2;

/// Whether a coefficient equal to the threshold counts as a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThresholdPolicy {
    /// coefficient > threshold
    #[default]
    Strict,
    /// coefficient >= threshold
    Inclusive,
}

impl ThresholdPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Inclusive => "inclusive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold {
    value: f64,
    policy: ThresholdPolicy,
}

impl Default for Threshold {
    fn default() -> Self {
        Self {
            value: DEFAULT_THRESHOLD,
            policy: ThresholdPolicy::Strict,
        }
    }
}

impl Threshold {
    pub fn new(value: f64, policy: ThresholdPolicy) -> Result<Self, PlagiarismError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(PlagiarismError::Config(format!(
                "threshold must be within [0, 1], got {}",
                value
            )));
        }
        Ok(Self { value, policy })
    }

    pub fn strict(value: f64) -> Result<Self, PlagiarismError> {
        Self::new(value, ThresholdPolicy::Strict)
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn policy(&self) -> ThresholdPolicy {
        self.policy
    }

    pub fn is_exceeded_by(&self, coefficient: f64) -> bool {
        match self.policy {
            ThresholdPolicy::Strict => coefficient > self.value,
            ThresholdPolicy::Inclusive => coefficient >= self.value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_strict_point_two() {
        let t = Threshold::default();
        assert_eq!(t.value(), 0.2);
        assert_eq!(t.policy(), ThresholdPolicy::Strict);
    }

    #[test]
    fn test_strict_excludes_equality() {
        let t = Threshold::strict(0.25).unwrap();
        assert!(!t.is_exceeded_by(0.25));
        assert!(t.is_exceeded_by(0.26));
    }

    #[test]
    fn test_inclusive_accepts_equality() {
        let t = Threshold::new(0.25, ThresholdPolicy::Inclusive).unwrap();
        assert!(t.is_exceeded_by(0.25));
        assert!(!t.is_exceeded_by(0.24));
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!(Threshold::strict(-0.1).is_err());
        assert!(Threshold::strict(1.5).is_err());
        assert!(Threshold::strict(f64::NAN).is_err());
        assert!(Threshold::strict(0.0).is_ok());
        assert!(Threshold::strict(1.0).is_ok());
    }

    #[test]
    fn test_policy_serde() {
        let p: ThresholdPolicy = serde_yaml::from_str("inclusive").unwrap();
        assert_eq!(p, ThresholdPolicy::Inclusive);
        assert_eq!(p.as_str(), "inclusive");
    }
}
