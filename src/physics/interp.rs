//-
// Copyright (c) 2017 Jason Lingle
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

//! Render-time blending of discrete simulation samples.
//!
//! The simulation advances in fixed steps while the render path runs at
//! whatever rate the host manages, so a displayed frame almost always falls
//! between two simulated states. These functions reconcile the last two
//! samples into one smooth display state, with `ratio` — the fraction of
//! the next fixed step elapsed at render time — as the blend factor.
//!
//! Both functions are pure. They tolerate `ratio` outside `[0, 1]`
//! (extrapolation) without failing, though accuracy outside that range is
//! not promised.

use cg;
use cg::vec3;

use physics::defs::Position;

/// Linearly interpolate an integer world coordinate.
///
/// The fractional part truncates toward zero: display positions land on
/// whole world units, and repeated blends of the same pair never jitter
/// across a unit boundary.
#[inline]
pub fn interpolate_coord(current: i32, prev: i32, ratio: f32) -> i32 {
    let diff = current - prev;
    (diff as f32 * ratio) as i32 + prev
}

/// Interpolate two angles in degrees on a `[0, 360)` cycle, taking the
/// shorter arc.
///
/// A step can read 359 -> 1 or 1 -> 359; a raw difference beyond 270 in
/// either direction is wraparound, not a genuine rotation, so it is pulled
/// back by a full turn before blending. Rotations faster than 270 degrees
/// per step are indistinguishable from wraparound and blend the short way.
/// The result is not normalised; callers treat angles modulo 360.
#[inline]
pub fn interpolate_angle(current: f32, prev: f32, ratio: f32) -> f32 {
    let mut diff = current - prev;
    if diff > 270.0 {
        diff -= 360.0;
    } else if diff < -270.0 {
        diff += 360.0;
    }
    diff * ratio + prev
}

/// One discrete simulation sample of an entity's pose.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub pos: Position,
    /// Rotation about the three axes, in degrees.
    pub rot: cg::Vector3<f32>,
}

impl Sample {
    pub fn new(pos: Position, rot: cg::Vector3<f32>) -> Sample {
        Sample { pos: pos, rot: rot }
    }
}

/// The last two samples of an entity, in the form the render path consumes.
///
/// The owner pushes one sample per fixed step; the interpolation reads are
/// pure functions of the stored pair and the caller's ratio.
#[derive(Clone, Copy, Debug)]
pub struct History {
    prev: Sample,
    current: Sample,
}

impl History {
    /// Start a history with both samples at `initial`, so reads are
    /// well-defined before the second step completes.
    pub fn new(initial: Sample) -> History {
        History { prev: initial, current: initial }
    }

    /// Record the next fixed-step sample, shifting the current one back.
    pub fn push(&mut self, s: Sample) {
        self.prev = self.current;
        self.current = s;
    }

    pub fn prev(&self) -> Sample {
        self.prev
    }

    pub fn current(&self) -> Sample {
        self.current
    }

    /// The blended position `ratio` of the way from the previous sample to
    /// the current one.
    pub fn position_at(&self, ratio: f32) -> Position {
        vec3(interpolate_coord(self.current.pos.x, self.prev.pos.x, ratio),
             interpolate_coord(self.current.pos.y, self.prev.pos.y, ratio),
             interpolate_coord(self.current.pos.z, self.prev.pos.z, ratio))
    }

    /// The blended rotation, per axis, with wraparound correction.
    pub fn rotation_at(&self, ratio: f32) -> cg::Vector3<f32> {
        vec3(interpolate_angle(self.current.rot.x, self.prev.rot.x, ratio),
             interpolate_angle(self.current.rot.y, self.prev.rot.y, ratio),
             interpolate_angle(self.current.rot.z, self.prev.rot.z, ratio))
    }
}
