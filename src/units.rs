//! Type-safe time quantities for the animation cycle.

use std::ops::{Add, Deref, Mul, Rem, Sub};

/// Time in seconds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Seconds(pub f32);

impl Deref for Seconds {
    type Target = f32;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Add for Seconds {
    type Output = Seconds;

    fn add(self, other: Seconds) -> Seconds {
        Seconds(*self + *other)
    }
}

impl Sub for Seconds {
    type Output = Seconds;

    fn sub(self, other: Seconds) -> Seconds {
        Seconds(*self - *other)
    }
}

impl Mul<f32> for Seconds {
    type Output = Seconds;

    fn mul(self, scalar: f32) -> Seconds {
        Seconds(*self * scalar)
    }
}

impl Rem for Seconds {
    type Output = Seconds;

    fn rem(self, modulus: Seconds) -> Seconds {
        Seconds(*self % *modulus)
    }
}

impl std::fmt::Display for Seconds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}s", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        let sum = Seconds(4.5) + Seconds(3.0);
        assert_eq!(sum, Seconds(7.5));
        assert_eq!(Seconds(7.5) - Seconds(3.0), Seconds(4.5));
        assert_eq!(Seconds(2.0) * 2.5, Seconds(5.0));
    }

    #[test]
    fn test_wrapping() {
        let wrapped = Seconds(21.5) % Seconds(17.0);
        assert!((*wrapped - 4.5).abs() < 1e-6);
    }
}
