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

/*! The spatial index over placed track elements.

A stage places up to tens of thousands of elements — triggers, obstacles,
decorations — and every fixed step the collision and trigger checks need the
handful of them near each vehicle. Scanning the full population per vehicle
per step is what this module exists to avoid: the track's horizontal extent
is partitioned into a uniform grid of `SECTOR_SIZE`-wide sectors, and
queries consider only the 3x3 sector neighborhood around a vehicle.

Element attributes are stored as parallel `Unbounded` columns indexed by
element id, so the hot checks touch only the columns they need. The grid
itself stores no per-sector bucket lists; the partition parameters alone are
enough to classify an element's position on demand, and rebuilding after a
stage change is a matter of recomputing two integers.

Sector division also performs the one normalisation pass the attribute data
needs: damage id 167, which older track data uses as an alias for id 1, is
collapsed so the per-step checks compare a single canonical value.
*/

use cg::vec3;
use smallvec::SmallVec;

use numext::safe_abs;
use physics::defs::{Coord, Position, Rotation, SECTOR_SIZE};
use physics::unbounded::Unbounded;

bitflags! {
    /// Behavior flags of a placed track element.
    #[derive(Default)]
    pub struct ElementFlags: u32 {
        /// The element does not act as a solid wall; collision policy
        /// treats it as pass-through.
        const NOT_WALL = 1 << 0;
        /// The element is purely decorative and has no gameplay
        /// interaction.
        const DECOR = 1 << 1;
    }
}

/// Damage id used by older track data as an alias for `DAMAGE_CANONICAL`.
const DAMAGE_ALIAS: i32 = 167;
/// The id the alias collapses to during sector division.
const DAMAGE_CANONICAL: i32 = 1;

/// One placed track element, assembled from the parallel columns.
///
/// This is the construction/inspection view; the index itself never stores
/// elements in this form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Element {
    pub pos: Position,
    /// Rotation about the three axes, in integer degrees.
    pub rot: Rotation,
    /// Surface/skid-mark behavior id.
    pub skid: i32,
    /// Damage/effect id.
    pub damage: i32,
    pub flags: ElementFlags,
}

impl Default for Element {
    fn default() -> Element {
        Element {
            pos: vec3(0, 0, 0),
            rot: vec3(0, 0, 0),
            skid: 0,
            damage: 0,
            flags: ElementFlags::empty(),
        }
    }
}

/// Generates the by-id accessor pair for one attribute column.
macro_rules! tracker_attr {
    ($(#[$doc:meta])* $field:ident, $get:ident, $set:ident, $typ:ty) => {
        $(#[$doc])*
        #[inline]
        pub fn $get(&self, id: usize) -> $typ {
            self.$field.get(id)
        }

        #[inline]
        pub fn $set(&mut self, id: usize, v: $typ) {
            self.$field.set(id, v);
        }
    }
}

/// The track spatial index: parallel per-element attribute columns plus the
/// sector grid parameters.
///
/// Populated once when a stage loads, cleared and rebuilt wholesale on
/// stage change; elements are never removed individually during a session.
#[derive(Default)]
pub struct Trackers {
    x: Unbounded<Coord>,
    y: Unbounded<Coord>,
    z: Unbounded<Coord>,
    rad_x: Unbounded<Coord>,
    rad_y: Unbounded<Coord>,
    rad_z: Unbounded<Coord>,
    skid: Unbounded<i32>,
    damage: Unbounded<i32>,
    flags: Unbounded<ElementFlags>,
    /// Live element count. Attribute columns all have logical length `nt`;
    /// index `i` refers to the same element in every column.
    nt: usize,
    /// World extent along X and Z, as last passed to `divide_sectors`.
    sx: Coord,
    sz: Coord,
    /// Greatest valid sector index along X and Z (zero-based).
    ncx: i32,
    ncz: i32,
}

impl Trackers {
    pub fn new() -> Trackers {
        Trackers::default()
    }

    /// The number of live elements.
    pub fn len(&self) -> usize {
        self.nt
    }

    pub fn is_empty(&self) -> bool {
        0 == self.nt
    }

    /// The world extent last partitioned, `(x, z)`.
    pub fn extent(&self) -> (Coord, Coord) {
        (self.sx, self.sz)
    }

    /// Greatest valid sector index along each axis, `(ncx, ncz)`.
    pub fn sector_max(&self) -> (i32, i32) {
        (self.ncx, self.ncz)
    }

    /// Append an element, returning its id.
    pub fn add(&mut self, e: Element) -> usize {
        let id = self.nt;
        self.x.set(id, e.pos.x);
        self.y.set(id, e.pos.y);
        self.z.set(id, e.pos.z);
        self.rad_x.set(id, e.rot.x);
        self.rad_y.set(id, e.rot.y);
        self.rad_z.set(id, e.rot.z);
        self.skid.set(id, e.skid);
        self.damage.set(id, e.damage);
        self.flags.set(id, e.flags);
        self.nt += 1;
        id
    }

    /// Remove every element and forget the partition.
    pub fn clear(&mut self) {
        self.x.clear();
        self.y.clear();
        self.z.clear();
        self.rad_x.clear();
        self.rad_y.clear();
        self.rad_z.clear();
        self.skid.clear();
        self.damage.clear();
        self.flags.clear();
        self.nt = 0;
        self.sx = 0;
        self.sz = 0;
        self.ncx = 0;
        self.ncz = 0;
    }

    /// Partition the given world extent into sectors and normalise the
    /// damage ids of the live elements.
    ///
    /// Sector counts are `extent / SECTOR_SIZE`, at least 1 per axis, then
    /// decremented by one to form the greatest zero-based sector index.
    /// Safe to call again on re-partition; both the grid computation and
    /// the normalisation pass are idempotent.
    pub fn divide_sectors(&mut self, extent_x: Coord, extent_z: Coord) {
        self.sx = extent_x;
        self.sz = extent_z;

        let mut ncx = extent_x / SECTOR_SIZE;
        if ncx <= 0 {
            ncx = 1;
        }
        let mut ncz = extent_z / SECTOR_SIZE;
        if ncz <= 0 {
            ncz = 1;
        }

        let mut remapped = 0usize;
        for i in 0..self.nt {
            if DAMAGE_ALIAS == self.damage.get(i) {
                self.damage.set(i, DAMAGE_CANONICAL);
                remapped += 1;
            }
        }
        if remapped > 0 {
            debug!("collapsed damage alias {} => {} on {} of {} elements",
                   DAMAGE_ALIAS, DAMAGE_CANONICAL, remapped, self.nt);
        }

        self.ncx = ncx - 1;
        self.ncz = ncz - 1;
        debug!("track extent {}x{} divided into {}x{} sectors",
               extent_x, extent_z, self.ncx + 1, self.ncz + 1);
    }

    /// The sector containing world coordinates `(x, z)`, clamped to the
    /// grid.
    #[inline]
    pub fn sector_of(&self, x: Coord, z: Coord) -> (i32, i32) {
        ((x / SECTOR_SIZE).max(0).min(self.ncx),
         (z / SECTOR_SIZE).max(0).min(self.ncz))
    }

    /// Ids of elements whose sector lies within the 3x3 neighborhood of
    /// the sector containing `(x, z)`.
    pub fn ids_near(&self, x: Coord, z: Coord) -> SmallVec<[usize; 64]> {
        let (sx, sz) = self.sector_of(x, z);
        let mut out = SmallVec::new();
        for i in 0..self.nt {
            let (ex, ez) = self.sector_of(self.x.get(i), self.z.get(i));
            if safe_abs(ex - sx) <= 1 && safe_abs(ez - sz) <= 1 {
                out.push(i);
            }
        }
        out
    }

    /// Assemble the composite view of element `id`. Ids never written read
    /// as the all-default element.
    pub fn element(&self, id: usize) -> Element {
        Element {
            pos: vec3(self.x.get(id), self.y.get(id), self.z.get(id)),
            rot: vec3(self.rad_x.get(id), self.rad_y.get(id),
                      self.rad_z.get(id)),
            skid: self.skid.get(id),
            damage: self.damage.get(id),
            flags: self.flags.get(id),
        }
    }

    tracker_attr!(/// World X coordinate.
                  x, x, set_x, Coord);
    tracker_attr!(/// World Y coordinate.
                  y, y, set_y, Coord);
    tracker_attr!(/// World Z coordinate.
                  z, z, set_z, Coord);
    tracker_attr!(/// Rotation about the X axis, integer degrees.
                  rad_x, rad_x, set_rad_x, Coord);
    tracker_attr!(/// Rotation about the Y axis, integer degrees.
                  rad_y, rad_y, set_rad_y, Coord);
    tracker_attr!(/// Rotation about the Z axis, integer degrees.
                  rad_z, rad_z, set_rad_z, Coord);
    tracker_attr!(/// Surface/skid-mark behavior id.
                  skid, skid, set_skid, i32);
    tracker_attr!(/// Damage/effect id.
                  damage, damage, set_damage, i32);
    tracker_attr!(flags, flags, set_flags, ElementFlags);

    /// Whether element `id` passes through collision checks instead of
    /// acting as a solid wall.
    #[inline]
    pub fn not_wall(&self, id: usize) -> bool {
        self.flags.get(id).contains(ElementFlags::NOT_WALL)
    }

    /// Whether element `id` is purely decorative.
    #[inline]
    pub fn decor(&self, id: usize) -> bool {
        self.flags.get(id).contains(ElementFlags::DECOR)
    }
}

#[cfg(test)]
mod test {
    use cg::vec3;

    use super::*;

    fn element_at(x: Coord, z: Coord) -> Element {
        Element {
            pos: vec3(x, 0, z),
            .. Element::default()
        }
    }

    #[test]
    fn sector_counts_from_extent() {
        let mut t = Trackers::new();
        t.divide_sectors(9500, 9500);
        assert_eq!((2, 2), t.sector_max());

        // Extents under one sector width still produce one sector.
        t.divide_sectors(2999, 100);
        assert_eq!((0, 0), t.sector_max());

        t.divide_sectors(3000, 6000);
        assert_eq!((0, 1), t.sector_max());
    }

    #[test]
    fn sector_of_clamps_to_the_grid() {
        let mut t = Trackers::new();
        t.divide_sectors(9500, 9500);
        assert_eq!((0, 0), t.sector_of(0, 0));
        assert_eq!((1, 0), t.sector_of(3000, 2999));
        assert_eq!((2, 2), t.sector_of(8999, 100_000));
        assert_eq!((0, 0), t.sector_of(-500, -1));
    }

    #[test]
    fn damage_alias_collapses_once() {
        let mut t = Trackers::new();
        t.add(Element { damage: 167, .. Element::default() });
        t.add(Element { damage: 5, .. Element::default() });
        t.add(Element { damage: 167, .. Element::default() });
        t.add(Element { damage: 1, .. Element::default() });

        t.divide_sectors(9500, 9500);
        assert_eq!(1, t.damage(0));
        assert_eq!(5, t.damage(1));
        assert_eq!(1, t.damage(2));
        assert_eq!(1, t.damage(3));

        // Re-partition leaves already-normalised ids alone.
        t.divide_sectors(12000, 9500);
        assert_eq!(vec![1, 5, 1, 1],
                   (0..4).map(|i| t.damage(i)).collect::<Vec<_>>());
    }

    #[test]
    fn unwritten_ids_read_as_defaults() {
        let t = Trackers::new();
        assert_eq!(Element::default(), t.element(12345));
        assert_eq!(0, t.skid(7));
        assert!(!t.not_wall(7));
        assert!(!t.decor(7));
    }

    #[test]
    fn flag_accessors_track_the_flags_column() {
        let mut t = Trackers::new();
        let id = t.add(Element {
            flags: ElementFlags::NOT_WALL | ElementFlags::DECOR,
            .. Element::default()
        });
        assert!(t.not_wall(id));
        assert!(t.decor(id));

        t.set_flags(id, ElementFlags::empty());
        assert!(!t.not_wall(id));
    }

    #[test]
    fn add_assigns_sequential_ids() {
        let mut t = Trackers::new();
        assert_eq!(0, t.add(element_at(100, 100)));
        assert_eq!(1, t.add(element_at(4000, 100)));
        assert_eq!(2, t.len());
        assert_eq!(100, t.x(0));
        assert_eq!(4000, t.x(1));
    }

    #[test]
    fn attribute_writes_do_not_create_elements() {
        let mut t = Trackers::new();
        t.set_skid(10, 3);
        assert_eq!(0, t.len());
        assert_eq!(3, t.skid(10));
    }

    #[test]
    fn ids_near_bounds_the_neighborhood() {
        let mut t = Trackers::new();
        // 4x4 sector grid over a 12000x12000 extent.
        let near = t.add(element_at(1500, 1500));       // sector (0, 0)
        let edge = t.add(element_at(4500, 4500));       // sector (1, 1)
        let far = t.add(element_at(10_500, 10_500));    // sector (3, 3)
        t.divide_sectors(12_000, 12_000);

        let found = t.ids_near(100, 100);
        assert!(found.contains(&near));
        assert!(found.contains(&edge));
        assert!(!found.contains(&far));

        let found = t.ids_near(10_000, 10_000);
        assert!(found.contains(&far));
        assert!(!found.contains(&near));
    }

    #[test]
    fn clear_forgets_elements_and_partition() {
        let mut t = Trackers::new();
        t.add(element_at(100, 100));
        t.divide_sectors(9500, 9500);
        t.clear();
        assert!(t.is_empty());
        assert_eq!((0, 0), t.sector_max());
        assert_eq!(Element::default(), t.element(0));
    }

    proptest! {
        #[test]
        fn sector_indices_stay_in_range(
            extent_x in 1i32..200_000, extent_z in 1i32..200_000,
            x in -200_000i32..200_000, z in -200_000i32..200_000)
        {
            let mut t = Trackers::new();
            t.divide_sectors(extent_x, extent_z);
            let (ncx, ncz) = t.sector_max();
            assert!(ncx >= 0 && ncz >= 0);
            let (sx, sz) = t.sector_of(x, z);
            assert!(sx >= 0 && sx <= ncx, "sx {} not in [0, {}]", sx, ncx);
            assert!(sz >= 0 && sz <= ncz, "sz {} not in [0, {}]", sz, ncz);
        }

        #[test]
        fn no_alias_survives_division(damage in 0i32..400, n in 1usize..64) {
            let mut t = Trackers::new();
            for _ in 0..n {
                t.add(Element { damage: damage, .. Element::default() });
            }
            t.divide_sectors(9500, 9500);
            for i in 0..n {
                assert!(167 != t.damage(i));
                if 167 != damage {
                    assert_eq!(damage, t.damage(i));
                }
            }
        }
    }
}
