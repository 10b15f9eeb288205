//-
// Copyright (c) 2018, Jason Lingle
//
// Permission to  use, copy,  modify, and/or distribute  this software  for any
// purpose  with or  without fee  is hereby  granted, provided  that the  above
// copyright notice and this permission notice appear in all copies.
//
// THE SOFTWARE  IS PROVIDED "AS  IS" AND  THE AUTHOR DISCLAIMS  ALL WARRANTIES
// WITH  REGARD   TO  THIS  SOFTWARE   INCLUDING  ALL  IMPLIED   WARRANTIES  OF
// MERCHANTABILITY AND FITNESS. IN NO EVENT  SHALL THE AUTHOR BE LIABLE FOR ANY
// SPECIAL,  DIRECT,   INDIRECT,  OR  CONSEQUENTIAL  DAMAGES   OR  ANY  DAMAGES
// WHATSOEVER RESULTING FROM LOSS OF USE, DATA OR PROFITS, WHETHER IN AN ACTION
// OF  CONTRACT, NEGLIGENCE  OR OTHER  TORTIOUS ACTION,  ARISING OUT  OF OR  IN
// CONNECTION WITH THE USE OR PERFORMANCE OF THIS SOFTWARE.

/*! An angle paired with its sine and cosine.

Vehicle dynamics formulas read the sine and cosine of the same handful of
angles over and over within a step — heading for the direction vector,
per-axis rotations for every geometry batch pushed through the transform
kernels. `Angle` evaluates `sin_cos` exactly once, when the numeric value is
set, so every later read is a field load.

The type behaves as a plain degree scalar: arithmetic operates on the
numeric value and yields a new cached pair, comparisons consider the numeric
value only, and `From` conversions to and from `f32` let it flow through
arithmetic-heavy formulas without unwrapping at every call site. Angles are
not normalised; 360 and 0 are distinct values that happen to share a
direction vector.

NaN and infinity propagate per IEEE semantics. Nothing here panics; callers
integrating unsanitised upstream values are expected to clean them with the
`numext` helpers first.
*/

use std::cmp::Ordering;
use std::f32::consts::PI;
use std::fmt;
use std::ops;

/// An angle in degrees with its sine and cosine computed at construction.
#[derive(Clone, Copy, Debug)]
pub struct Angle {
    deg: f32,
    sin: f32,
    cos: f32,
}

impl Angle {
    /// The zero angle.
    pub const ZERO: Angle = Angle { deg: 0.0, sin: 0.0, cos: 1.0 };

    #[inline]
    pub fn new(deg: f32) -> Angle {
        let rad = deg * (PI / 180.0);
        Angle { deg: deg, sin: rad.sin(), cos: rad.cos() }
    }

    /// The numeric value, in degrees.
    #[inline]
    pub fn deg(self) -> f32 {
        self.deg
    }

    #[inline]
    pub fn sin(self) -> f32 {
        self.sin
    }

    #[inline]
    pub fn cos(self) -> f32 {
        self.cos
    }
}

impl Default for Angle {
    fn default() -> Angle {
        Angle::ZERO
    }
}

impl From<f32> for Angle {
    #[inline]
    fn from(deg: f32) -> Angle {
        Angle::new(deg)
    }
}

impl From<Angle> for f32 {
    #[inline]
    fn from(a: Angle) -> f32 {
        a.deg
    }
}

impl ops::Add for Angle {
    type Output = Angle;
    #[inline]
    fn add(self, rhs: Angle) -> Angle {
        Angle::new(self.deg + rhs.deg)
    }
}

impl ops::Add<f32> for Angle {
    type Output = Angle;
    #[inline]
    fn add(self, rhs: f32) -> Angle {
        Angle::new(self.deg + rhs)
    }
}

impl ops::Sub for Angle {
    type Output = Angle;
    #[inline]
    fn sub(self, rhs: Angle) -> Angle {
        Angle::new(self.deg - rhs.deg)
    }
}

impl ops::Sub<f32> for Angle {
    type Output = Angle;
    #[inline]
    fn sub(self, rhs: f32) -> Angle {
        Angle::new(self.deg - rhs)
    }
}

impl ops::Neg for Angle {
    type Output = Angle;
    #[inline]
    fn neg(self) -> Angle {
        Angle::new(-self.deg)
    }
}

impl ops::Mul<f32> for Angle {
    type Output = Angle;
    #[inline]
    fn mul(self, rhs: f32) -> Angle {
        Angle::new(self.deg * rhs)
    }
}

impl ops::Div<f32> for Angle {
    type Output = Angle;
    #[inline]
    fn div(self, rhs: f32) -> Angle {
        Angle::new(self.deg / rhs)
    }
}

impl ops::AddAssign for Angle {
    #[inline]
    fn add_assign(&mut self, rhs: Angle) {
        *self = *self + rhs;
    }
}

impl ops::AddAssign<f32> for Angle {
    #[inline]
    fn add_assign(&mut self, rhs: f32) {
        *self = *self + rhs;
    }
}

impl ops::SubAssign for Angle {
    #[inline]
    fn sub_assign(&mut self, rhs: Angle) {
        *self = *self - rhs;
    }
}

impl ops::SubAssign<f32> for Angle {
    #[inline]
    fn sub_assign(&mut self, rhs: f32) {
        *self = *self - rhs;
    }
}

impl PartialEq for Angle {
    #[inline]
    fn eq(&self, other: &Angle) -> bool {
        self.deg == other.deg
    }
}

impl PartialEq<f32> for Angle {
    #[inline]
    fn eq(&self, other: &f32) -> bool {
        self.deg == *other
    }
}

impl PartialOrd for Angle {
    #[inline]
    fn partial_cmp(&self, other: &Angle) -> Option<Ordering> {
        self.deg.partial_cmp(&other.deg)
    }
}

impl PartialOrd<f32> for Angle {
    #[inline]
    fn partial_cmp(&self, other: &f32) -> Option<Ordering> {
        self.deg.partial_cmp(other)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}deg", self.deg)
    }
}

#[cfg(test)]
mod test {
    use std::f32;

    use super::*;

    const EPS: f32 = 1.0e-6;

    #[test]
    fn cardinal_angles() {
        assert_eq!(0.0, Angle::new(0.0).sin());
        assert_eq!(1.0, Angle::new(0.0).cos());
        assert!((Angle::new(90.0).sin() - 1.0).abs() < EPS);
        assert!(Angle::new(90.0).cos().abs() < EPS);
        assert!((Angle::new(180.0).cos() + 1.0).abs() < EPS);
        assert!((Angle::new(270.0).sin() + 1.0).abs() < EPS);
    }

    #[test]
    fn arithmetic_recomputes_the_pair() {
        let sum = Angle::new(30.0) + Angle::new(60.0);
        assert_eq!(90.0, sum.deg());
        assert!((sum.sin() - 1.0).abs() < EPS);

        let neg = -Angle::new(30.0);
        assert!((neg.sin() + Angle::new(30.0).sin()).abs() < EPS);
        assert!((neg.cos() - Angle::new(30.0).cos()).abs() < EPS);

        let mut acc = Angle::new(45.0);
        acc += 45.0;
        assert_eq!(90.0, acc.deg());
        assert!(acc.cos().abs() < EPS);
    }

    #[test]
    fn comparison_uses_the_numeric_value_only() {
        assert_eq!(Angle::new(90.0), Angle::new(90.0));
        assert!(Angle::new(90.0) != Angle::new(450.0));
        assert!(Angle::new(1.0) < Angle::new(2.0));
        assert!(Angle::new(1.5) > 1.0);
        assert!(Angle::new(360.0) != Angle::new(0.0));
    }

    #[test]
    fn nan_propagates_without_panicking() {
        let a = Angle::new(f32::NAN);
        assert!(a.deg().is_nan());
        assert!(a.sin().is_nan());
        assert!(a.cos().is_nan());
        assert!(!(a == a));
        assert!((a + 1.0).deg().is_nan());
    }

    proptest! {
        #[test]
        fn construction_caches_sin_cos(deg in -720.0f32..720.0f32) {
            let a = Angle::new(deg);
            let rad = deg * ::std::f32::consts::PI / 180.0;
            assert!((a.sin() - rad.sin()).abs() < EPS,
                    "sin({}) => {}, want {}", deg, a.sin(), rad.sin());
            assert!((a.cos() - rad.cos()).abs() < EPS,
                    "cos({}) => {}, want {}", deg, a.cos(), rad.cos());
        }

        #[test]
        fn conversions_round_trip(deg in -720.0f32..720.0f32) {
            let a: Angle = deg.into();
            let back: f32 = a.into();
            assert_eq!(deg, back);
        }

        #[test]
        fn unit_direction(deg in -720.0f32..720.0f32) {
            let a = Angle::new(deg);
            let len = a.sin() * a.sin() + a.cos() * a.cos();
            assert!((len - 1.0).abs() < 1.0e-5);
        }
    }
}
