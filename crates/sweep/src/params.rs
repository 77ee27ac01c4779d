//! Parameter combinations and range enumeration.

use std::cmp::Ordering;

/// Rounds to two decimal places; repeated stepping would otherwise
/// accumulate binary floating-point drift across the range.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Enumerates reduction-factor values from `min` to `max` inclusive.
///
/// Each step is re-rounded to two decimals, so `0.05` steps land on
/// exact hundredths no matter how long the range is.
pub fn rp_factor_values(min: f64, max: f64, step: f64) -> Vec<f64> {
    let mut values = Vec::new();
    let mut current = round2(min);
    while current <= max {
        values.push(current);
        current = round2(current + step);
    }
    values
}

/// Enumerates shape-coefficient values from `min` to `max` inclusive.
pub fn shape_values(min: i64, max: i64, step: i64) -> Vec<i64> {
    let mut values = Vec::new();
    let mut current = min;
    while current <= max {
        values.push(current);
        current += step;
    }
    values
}

/// One point of the two-dimensional parameter sweep.
///
/// Reduction factors are two-decimal values, so equality and ordering
/// go through the scaled integer form — the same form artifact keys
/// carry.
#[derive(Debug, Clone, Copy)]
pub struct Combination {
    /// Fraction of field capacity defining the reduction point.
    pub rp_factor: f64,
    /// Runoff shape coefficient.
    pub shape: i64,
}

impl Combination {
    /// Creates a combination.
    pub fn new(rp_factor: f64, shape: i64) -> Self {
        Self { rp_factor, shape }
    }

    /// The reduction factor scaled by 100, as used in artifact keys.
    pub fn rp_scaled(&self) -> u32 {
        (self.rp_factor * 100.0).round() as u32
    }

    /// Short label for logs and artifact names, e.g. `rp85_c150`.
    pub fn label(&self) -> String {
        format!("rp{}_c{}", self.rp_scaled(), self.shape)
    }
}

impl PartialEq for Combination {
    fn eq(&self, other: &Self) -> bool {
        self.rp_scaled() == other.rp_scaled() && self.shape == other.shape
    }
}

impl Eq for Combination {}

impl PartialOrd for Combination {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Combination {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.rp_scaled(), self.shape).cmp(&(other.rp_scaled(), other.shape))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn rp_values_inclusive_of_max() {
        let values = rp_factor_values(0.75, 0.85, 0.05);
        assert_eq!(values.len(), 3);
        assert_abs_diff_eq!(values[0], 0.75);
        assert_abs_diff_eq!(values[1], 0.8);
        assert_abs_diff_eq!(values[2], 0.85);
    }

    #[test]
    fn rp_values_do_not_drift() {
        // 0.01 steps are not exactly representable; 30 of them must
        // still land on 1.05 exactly.
        let values = rp_factor_values(0.75, 1.05, 0.01);
        assert_eq!(values.len(), 31);
        assert_abs_diff_eq!(*values.last().unwrap(), 1.05);
    }

    #[test]
    fn rp_single_value_when_min_equals_max() {
        let values = rp_factor_values(0.85, 0.85, 0.05);
        assert_eq!(values, vec![0.85]);
    }

    #[test]
    fn shape_values_step() {
        assert_eq!(shape_values(150, 250, 50), vec![150, 200, 250]);
        assert_eq!(shape_values(150, 150, 50), vec![150]);
        assert_eq!(shape_values(150, 249, 50), vec![150, 200]);
    }

    #[test]
    fn combination_equality_uses_scaled_form() {
        // 0.1 + 0.2 != 0.3 in binary, but both scale to 30.
        let a = Combination::new(0.1 + 0.2, 150);
        let b = Combination::new(0.3, 150);
        assert_eq!(a, b);
        assert_eq!(a.rp_scaled(), 30);
    }

    #[test]
    fn combination_label() {
        assert_eq!(Combination::new(0.85, 150).label(), "rp85_c150");
    }

    #[test]
    fn combination_ordering() {
        let mut combos = vec![
            Combination::new(0.85, 200),
            Combination::new(0.8, 150),
            Combination::new(0.85, 150),
        ];
        combos.sort();
        assert_eq!(combos[0], Combination::new(0.8, 150));
        assert_eq!(combos[1], Combination::new(0.85, 150));
        assert_eq!(combos[2], Combination::new(0.85, 200));
    }
}
