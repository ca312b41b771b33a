use std::ops::{Add, Mul};

// Hand-rolled complex arithmetic; the escape-time loop only needs add,
// multiply and the squared magnitude.
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
    pub fn magnitude_squared(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
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
    fn test_magnitude_squared() {
        let c = Complex {
            real: 3.0,
            imag: -4.0,
        };
        assert_eq!(c.magnitude_squared(), 25.0);
    }

    #[test]
    fn test_magnitude_squared_of_zero() {
        assert_eq!(Complex::ZERO.magnitude_squared(), 0.0);
    }

    #[test]
    fn test_add() {
        let a = Complex {
            real: 1.0,
            imag: 2.0,
        };
        let b = Complex {
            real: -3.0,
            imag: 4.0,
        };

        let result = a + b;

        assert_eq!(result.real, -2.0);
        assert_eq!(result.imag, 6.0);
    }

    #[test]
    fn test_mul() {
        // (1 + 2i) * (3 + 4i) = -5 + 10i
        let a = Complex {
            real: 1.0,
            imag: 2.0,
        };
        let b = Complex {
            real: 3.0,
            imag: 4.0,
        };

        let result = a * b;

        assert_eq!(result.real, -5.0);
        assert_eq!(result.imag, 10.0);
    }

    #[test]
    fn test_square() {
        // (2 + 3i)^2 = -5 + 12i
        let c = Complex {
            real: 2.0,
            imag: 3.0,
        };

        let result = c * c;

        assert_eq!(result.real, -5.0);
        assert_eq!(result.imag, 12.0);
    }
}
