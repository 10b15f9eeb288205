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

//! Plain-data stage descriptions.
//!
//! A stage is a world extent plus the list of track elements placed on it.
//! How a host obtains one — parsed from a track file, generated, hard-coded
//! in a test — is its own business; this module only defines the shape and
//! the load-time consistency checks. An inconsistent stage must abort the
//! load rather than be patched up, so a race never starts over a track the
//! author did not describe.

use physics::defs::{Coord, Position, Rotation};
use physics::trackers::ElementFlags;

/// Description of one placed element, as supplied by a stage source.
#[derive(Clone, Copy, Debug)]
pub struct ElementDef {
    pub pos: Position,
    /// Rotation about the three axes, in integer degrees.
    pub rot: Rotation,
    /// Surface/skid-mark behavior id.
    pub skid: i32,
    /// Damage/effect id. Older track data may use alias ids; these are
    /// normalised when the spatial index is divided, not here.
    pub damage: i32,
    pub flags: ElementFlags,
}

/// A loadable stage: world extent plus element placements.
#[derive(Clone, Debug)]
pub struct StageDef {
    /// Stage name, for diagnostics only.
    pub name: String,
    /// World extent along X, in world units.
    pub extent_x: Coord,
    /// World extent along Z, in world units.
    pub extent_z: Coord,
    pub elements: Vec<ElementDef>,
}

impl StageDef {
    pub fn new(name: &str, extent_x: Coord, extent_z: Coord) -> StageDef {
        StageDef {
            name: name.to_owned(),
            extent_x: extent_x,
            extent_z: extent_z,
            elements: Vec::new(),
        }
    }

    /// Check the stage for inconsistencies that must abort a load.
    pub fn validate(&self) -> Result<(), String> {
        if self.extent_x <= 0 || self.extent_z <= 0 {
            return Err(format!("stage {}: non-positive extent {}x{}",
                               self.name, self.extent_x, self.extent_z));
        }

        for (i, e) in self.elements.iter().enumerate() {
            if e.skid < 0 {
                return Err(format!(
                    "stage {}: element {} has negative skid id {}",
                    self.name, i, e.skid));
            }
            if e.damage < 0 {
                return Err(format!(
                    "stage {}: element {} has negative damage id {}",
                    self.name, i, e.damage));
            }
        }

        Ok(())
    }
}
