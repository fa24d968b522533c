use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Solver settings, passed explicitly to [`Game`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Largest per-count change between sweeps that still counts as converged.
    pub theta: Utility,
    /// Cap on the usage of any single (pitch, zone).
    pub max_usage: Probability,
    pub max_sweeps: usize,
    pub rules: Rules,
}

impl Config {
    pub fn validate(&self) -> Result<(), Error> {
        if !(self.theta.is_finite() && self.theta > 0.0) {
            return Err(Error::InvalidConfig(format!("theta {} must be positive", self.theta)));
        }
        if !(self.max_usage > 0.0 && self.max_usage <= 1.0) {
            return Err(Error::InvalidConfig(format!(
                "max usage {} must lie in (0, 1]",
                self.max_usage
            )));
        }
        if self.max_sweeps == 0 {
            return Err(Error::InvalidConfig("max sweeps must be at least 1".to_string()));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theta: THETA,
            max_usage: MAX_USAGE,
            max_sweeps: MAX_SWEEPS,
            rules: Rules::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(Config::default().validate().is_ok());
        assert_eq!(Config::default().rules, Rules::Expanded);
    }

    #[test]
    fn out_of_range_settings_are_rejected() {
        let base = Config::default();
        for config in [
            Config { theta: 0.0, ..base },
            Config { theta: f64::NAN, ..base },
            Config { max_usage: 0.0, ..base },
            Config { max_usage: 1.5, ..base },
            Config { max_sweeps: 0, ..base },
        ] {
            assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
        }
    }
}
