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

/*! Batched 2D rotation over parallel coordinate arrays.

Geometry moves between the world, camera, and model frames as parallel
arrays of coordinates, one array per axis. Rotating a batch about a pivot
`(offA, offB)` by an angle with sine `s` and cosine `c` is, per pair:

```text
  oa = a - offA
  ob = b - offB
  a' = offA + oa*c - ob*s
  b' = offB + oa*s + ob*c
```

i.e. translate so the pivot is the origin, apply the rotation matrix

```text
  | c  -s |
  | s   c |
```

and translate back. This kernel runs on every transformed geometry batch
every frame, so it is written as a single straight-line pass over the zipped
slices — no per-element branching, no temporaries proportional to the batch
size — which the auto-vectorizer turns into wide arithmetic.

Track geometry is stored in integer world units but the rotation itself is
evaluated in `f32`; the `Lane` trait supplies the conversions in and out of
working precision. The narrowing conversion truncates toward zero rather
than rounding, which the rest of the pipeline relies on for stability of
repeated transforms of the same source data.
*/

use std::ops;

use physics::angle::Angle;

/// A coordinate primitive that can pass through the `f32` rotation kernel.
pub trait Lane: Copy {
    fn to_work(self) -> f32;
    fn from_work(w: f32) -> Self;
}

impl Lane for f32 {
    #[inline(always)]
    fn to_work(self) -> f32 {
        self
    }

    #[inline(always)]
    fn from_work(w: f32) -> f32 {
        w
    }
}

impl Lane for i32 {
    #[inline(always)]
    fn to_work(self) -> f32 {
        self as f32
    }

    /// Truncates toward zero.
    #[inline(always)]
    fn from_work(w: f32) -> i32 {
        w as i32
    }
}

/// Rotate each pair `(a[i], b[i])` about `(off_a, off_b)` by `theta`, in
/// place.
///
/// `a` and `b` must have the same length; in debug builds a mismatch
/// asserts, in release builds the kernel covers the common prefix.
pub fn rotate<T: Lane>(a: &mut [T], b: &mut [T],
                       off_a: T, off_b: T, theta: Angle) {
    debug_assert_eq!(a.len(), b.len());

    let s = theta.sin();
    let c = theta.cos();
    let oa = off_a.to_work();
    let ob = off_b.to_work();

    for (pa, pb) in a.iter_mut().zip(b.iter_mut()) {
        let wa = pa.to_work() - oa;
        let wb = pb.to_work() - ob;
        *pa = T::from_work(oa + wa * c - wb * s);
        *pb = T::from_work(ob + wa * s + wb * c);
    }
}

/// Add `delta` to every element of `dst`.
pub fn translate<T>(dst: &mut [T], delta: T)
    where T: Copy + ops::Add<Output = T>
{
    for v in dst.iter_mut() {
        *v = *v + delta;
    }
}

#[cfg(test)]
mod test {
    use physics::angle::Angle;
    use super::*;

    #[test]
    fn quarter_turn_about_origin() {
        let mut a = [1024.0f32, 0.0, -256.0];
        let mut b = [0.0f32, 512.0, 128.0];
        rotate(&mut a, &mut b, 0.0, 0.0, Angle::new(90.0));

        // (x, y) -> (-y, x)
        let expected_a = [0.0f32, -512.0, -128.0];
        let expected_b = [1024.0f32, 0.0, -256.0];
        for i in 0..3 {
            assert!((a[i] - expected_a[i]).abs() < 1.0e-3,
                    "a[{}] => {}, want {}", i, a[i], expected_a[i]);
            assert!((b[i] - expected_b[i]).abs() < 1.0e-3,
                    "b[{}] => {}, want {}", i, b[i], expected_b[i]);
        }
    }

    #[test]
    fn pivot_is_a_fixed_point() {
        let mut a = [300i32];
        let mut b = [-700i32];
        rotate(&mut a, &mut b, 300, -700, Angle::new(123.0));
        assert_eq!(300, a[0]);
        assert_eq!(-700, b[0]);
    }

    #[test]
    fn integer_lanes_truncate() {
        // (1000, 0) rotated 45 degrees about the origin lands on
        // (707.10..., 707.10...); integer lanes keep the floor of each.
        let mut a = [1000i32];
        let mut b = [0i32];
        rotate(&mut a, &mut b, 0, 0, Angle::new(45.0));
        assert_eq!(707, a[0]);
        assert_eq!(707, b[0]);
    }

    #[test]
    fn translate_adds_scalar() {
        let mut v = [1i32, -2, 3000];
        translate(&mut v, 10);
        assert_eq!([11, 8, 3010], v);
    }

    proptest! {
        #[test]
        fn rotation_round_trips(
            ref pts in ::proptest::collection::vec(
                (-100_000.0f32..100_000.0f32, -100_000.0f32..100_000.0f32),
                1..32),
            off_a in -50_000.0f32..50_000.0f32,
            off_b in -50_000.0f32..50_000.0f32,
            deg in -360.0f32..360.0f32)
        {
            let mut a: Vec<f32> = pts.iter().map(|p| p.0).collect();
            let mut b: Vec<f32> = pts.iter().map(|p| p.1).collect();

            rotate(&mut a, &mut b, off_a, off_b, Angle::new(deg));
            rotate(&mut a, &mut b, off_a, off_b, Angle::new(-deg));

            for (i, p) in pts.iter().enumerate() {
                assert!((a[i] - p.0).abs() < 0.5 && (b[i] - p.1).abs() < 0.5,
                        "({}, {}) came back as ({}, {})",
                        p.0, p.1, a[i], b[i]);
            }
        }

        #[test]
        fn rotation_preserves_distance_to_pivot(
            x in -100_000.0f32..100_000.0f32,
            y in -100_000.0f32..100_000.0f32,
            deg in -360.0f32..360.0f32)
        {
            let mut a = [x];
            let mut b = [y];
            rotate(&mut a, &mut b, 0.0, 0.0, Angle::new(deg));
            let before = (x * x + y * y).sqrt();
            let after = (a[0] * a[0] + b[0] * b[0]).sqrt();
            assert!((before - after).abs() < 0.25,
                    "|({}, {})| = {}, rotated |.| = {}", x, y, before, after);
        }
    }
}
