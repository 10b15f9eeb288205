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

//! The simulation substrate: fixed-step scheduling, the track spatial
//! index, render-time state interpolation, and the transform kernels the
//! other pieces are built on.

pub mod angle;
pub mod defs;
pub mod interp;
pub mod sched;
pub mod stage;
pub mod trackers;
pub mod unbounded;
pub mod world;
pub mod xform;

pub use self::angle::Angle;
pub use self::defs::*;
pub use self::interp::{interpolate_angle, interpolate_coord, History, Sample};
pub use self::sched::{Driver, Scheduler};
pub use self::stage::{ElementDef, StageDef};
pub use self::trackers::{Element, ElementFlags, Trackers};
pub use self::unbounded::Unbounded;
pub use self::world::World;
