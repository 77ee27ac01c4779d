//! Sweep configuration: parameter ranges, retention flags, accumulation.

use swm_accumulate::AccumulationWindow;
use swm_interpolate::IdwConfig;
use swm_store::{Retention, Variable};

use crate::error::SweepError;
use crate::params::round2;

/// Which per-day intermediate grids survive the run.
///
/// Unretained variables keep only the most recent day on the store
/// while the simulation advances, and nothing once the combination
/// finishes.
#[derive(Debug, Clone, Copy, Default)]
pub struct RetainFlags {
    /// Keep the daily PET grids.
    pub pet: bool,
    /// Keep the daily AET grids.
    pub aet: bool,
    /// Keep the daily interpolated precipitation grids.
    pub precipitation: bool,
    /// Keep the daily runoff grids.
    pub runoff: bool,
    /// Keep the daily soil-moisture grids.
    pub soil_moisture: bool,
}

impl RetainFlags {
    /// Returns whether `variable`'s daily grids are retained.
    pub fn is_retained(&self, variable: Variable) -> bool {
        match variable {
            Variable::Pet => self.pet,
            Variable::Aet => self.aet,
            Variable::Precipitation => self.precipitation,
            Variable::Runoff => self.runoff,
            Variable::SoilMoisture => self.soil_moisture,
        }
    }

    /// Maps the flag to a store retention policy for the day loop.
    pub fn retention(&self, variable: Variable) -> Retention {
        if self.is_retained(variable) {
            Retention::KeepAll
        } else {
            Retention::KeepLast(1)
        }
    }
}

/// Full configuration of one sweep run.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// Smallest reduction factor.
    pub rp_factor_min: f64,
    /// Largest reduction factor (inclusive).
    pub rp_factor_max: f64,
    /// Reduction factor step, two-decimal resolution.
    pub rp_factor_step: f64,
    /// Smallest shape coefficient.
    pub shape_min: i64,
    /// Largest shape coefficient (inclusive).
    pub shape_max: i64,
    /// Shape coefficient step.
    pub shape_step: i64,
    /// Precipitation interpolation settings.
    pub idw: IdwConfig,
    /// Which intermediate grids survive the run.
    pub retain: RetainFlags,
    /// Optional accumulation sub-period.
    pub accumulation: Option<AccumulationWindow>,
}

impl SweepConfig {
    /// Validates ranges and the embedded IDW configuration.
    ///
    /// The reduction-factor step must survive the two-decimal rounding
    /// applied while stepping the range; a smaller step would never
    /// advance past the minimum.
    pub fn validate(&self) -> Result<(), SweepError> {
        if !(self.rp_factor_step > 0.0)
            || !self.rp_factor_step.is_finite()
            || round2(self.rp_factor_step) <= 0.0
            || self.rp_factor_min > self.rp_factor_max
        {
            return Err(SweepError::InvalidRange {
                name: "reduction factor",
                min: self.rp_factor_min,
                max: self.rp_factor_max,
                step: self.rp_factor_step,
            });
        }
        if self.shape_step <= 0 || self.shape_min > self.shape_max {
            return Err(SweepError::InvalidRange {
                name: "shape coefficient",
                min: self.shape_min as f64,
                max: self.shape_max as f64,
                step: self.shape_step as f64,
            });
        }
        self.idw.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SweepConfig {
        SweepConfig {
            rp_factor_min: 0.8,
            rp_factor_max: 0.9,
            rp_factor_step: 0.05,
            shape_min: 150,
            shape_max: 200,
            shape_step: 50,
            idw: IdwConfig::new(1.0),
            retain: RetainFlags::default(),
            accumulation: None,
        }
    }

    #[test]
    fn valid_config_passes() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn reversed_rp_range_fails() {
        let mut cfg = config();
        cfg.rp_factor_min = 0.95;
        assert!(matches!(
            cfg.validate(),
            Err(SweepError::InvalidRange {
                name: "reduction factor",
                ..
            })
        ));
    }

    #[test]
    fn sub_resolution_rp_step_fails() {
        // round2(0.004) == 0.0: stepping would never advance.
        let mut cfg = config();
        cfg.rp_factor_step = 0.004;
        assert!(matches!(
            cfg.validate(),
            Err(SweepError::InvalidRange {
                name: "reduction factor",
                ..
            })
        ));
    }

    #[test]
    fn zero_shape_step_fails() {
        let mut cfg = config();
        cfg.shape_step = 0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn invalid_idw_power_fails() {
        let mut cfg = config();
        cfg.idw = IdwConfig::new(-1.0);
        assert!(matches!(
            cfg.validate(),
            Err(SweepError::Interpolate(_))
        ));
    }

    #[test]
    fn retention_mapping() {
        let flags = RetainFlags {
            runoff: true,
            ..RetainFlags::default()
        };
        assert_eq!(flags.retention(Variable::Runoff), Retention::KeepAll);
        assert_eq!(flags.retention(Variable::Pet), Retention::KeepLast(1));
    }
}
