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

//! The real-time simulation core of a vehicle racing engine.
//!
//! This crate advances vehicle/world physics at a fixed rate independent of
//! the render rate, indexes static track geometry for fast proximity
//! queries, interpolates simulated state for smooth display between physics
//! steps, and provides the batched 2D rotation kernels those components
//! depend on.
//!
//! Rendering, audio, UI, and asset loading are external collaborators; they
//! drive this core through the narrow seams in `physics::sched` and
//! `physics::stage`.

#[macro_use]
extern crate bitflags;
#[macro_use]
extern crate log;
extern crate cgmath as cg;
extern crate smallvec;

#[cfg(test)]
#[macro_use]
extern crate proptest;

pub mod numext;
pub mod physics;
