use std::ops::{Add, Mul};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    pub const ZERO: Self = Self {
        real: 0.0,
        imag: 0.0,
    };

    #[must_use]
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    /// Euclidean modulus `|z|`.
    ///
    /// Uses `hypot` so that intermediate squares cannot overflow for finite
    /// inputs; infinite components yield `inf`.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.real.hypot(self.imag)
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            real: self.real * other.real - self.imag * other.imag,
            imag: self.real * other.imag + self.imag * other.real,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude() {
        let c = Complex::new(3.0, 4.0);
        assert_eq!(c.magnitude(), 5.0);
    }

    #[test]
    fn test_magnitude_negative_components() {
        let c = Complex::new(-3.0, -4.0);
        assert_eq!(c.magnitude(), 5.0);
    }

    #[test]
    fn test_magnitude_zero() {
        assert_eq!(Complex::ZERO.magnitude(), 0.0);
    }

    #[test]
    fn test_magnitude_of_huge_components_does_not_overflow() {
        let c = Complex::new(1e200, 1e200);
        assert!(c.magnitude().is_finite());
        assert!(c.magnitude() > 2.0);
    }

    #[test]
    fn test_magnitude_of_infinite_component_is_infinite() {
        let c = Complex::new(f64::INFINITY, 0.0);
        assert_eq!(c.magnitude(), f64::INFINITY);
    }

    #[test]
    fn test_add() {
        let result = Complex::new(1.0, 2.0) + Complex::new(-3.0, -7.0);
        assert_eq!(result, Complex::new(-2.0, -5.0));
    }

    #[test]
    fn test_mul() {
        // (1 + 2i) * (3 + 4i) = 3 + 4i + 6i + 8i² = -5 + 10i
        let result = Complex::new(1.0, 2.0) * Complex::new(3.0, 4.0);
        assert_eq!(result, Complex::new(-5.0, 10.0));
    }

    #[test]
    fn test_square() {
        // (2 + 3i)² = 4 + 12i - 9 = -5 + 12i
        let c = Complex::new(2.0, 3.0);
        assert_eq!(c * c, Complex::new(-5.0, 12.0));
    }
}
