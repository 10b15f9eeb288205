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

//! Common definitions for the simulation core.

use cg;

/// Type used for spatial world coordinates, distances between them, and
/// velocity.
///
/// Coordinates are measured in integer world units, which are not intended
/// to directly correspond to any real-world unit.
pub type Coord = i32;
/// A position in world space.
pub type Position = cg::Vector3<Coord>;
/// Per-axis rotation of a placed track element, in integer degrees.
pub type Rotation = cg::Vector3<Coord>;

/// Width of one spatial sector along the X and Z axes, in world units.
///
/// Tuned so that a single sector comfortably holds a few dozen track
/// elements at typical density, which bounds proximity queries to a small
/// neighborhood instead of a scan over every element.
pub const SECTOR_SIZE: Coord = 3000;

/// Duration of one fixed simulation step, in milliseconds.
pub const STEP_MS: i64 = 21;
