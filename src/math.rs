//! Shared numerical primitives.

/// Primary scalar type used across the crate.
pub type Scalar = f64;

/// Sum of reciprocals `Σ 1/v`.
///
/// Callers are responsible for rejecting zero entries first.
#[must_use]
pub fn reciprocal_sum(values: &[Scalar]) -> Scalar {
    values.iter().map(|v| v.recip()).sum()
}

/// Returns the index of the first exactly-zero entry, if any.
#[must_use]
pub fn first_zero(values: &[Scalar]) -> Option<usize> {
    values.iter().position(|&v| v == 0.0)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn reciprocal_sum_of_halves() {
        assert_relative_eq!(reciprocal_sum(&[2.0, 2.0]), 1.0, epsilon = 1.0e-12);
    }

    #[test]
    fn first_zero_finds_negative_zero() {
        assert_eq!(first_zero(&[1.0, -0.0, 0.0]), Some(1));
        assert_eq!(first_zero(&[1.0, 2.0]), None);
    }
}
