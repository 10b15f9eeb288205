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

//! The aggregate state of one simulation.
//!
//! Everything a running race mutates lives here: the track spatial index
//! and the per-car sample history the render path blends. The host owns the
//! `World` and threads it through its `Driver`; nothing in this crate is
//! process-wide, so independent worlds (a race and a replay, or a test
//! fixture per case) coexist without touching each other.

use numext::FloatExt;
use physics::interp::{History, Sample};
use physics::stage::StageDef;
use physics::trackers::{Element, Trackers};

/// The complete mutable state of one simulation.
#[derive(Default)]
pub struct World {
    pub trackers: Trackers,
    cars: Vec<History>,
    stage_name: String,
}

impl World {
    pub fn new() -> World {
        World::default()
    }

    /// The name of the loaded stage, or empty before any load.
    pub fn stage_name(&self) -> &str {
        &self.stage_name
    }

    /// Replace the loaded stage wholesale: validate, clear the index,
    /// repopulate it, and divide the sector grid.
    ///
    /// On error nothing is mutated; the previously loaded stage, if any,
    /// remains live.
    pub fn load_stage(&mut self, stage: &StageDef) -> Result<(), String> {
        stage.validate()?;

        self.trackers.clear();
        for e in &stage.elements {
            self.trackers.add(Element {
                pos: e.pos,
                rot: e.rot,
                skid: e.skid,
                damage: e.damage,
                flags: e.flags,
            });
        }
        self.trackers.divide_sectors(stage.extent_x, stage.extent_z);
        self.stage_name = stage.name.clone();

        info!("loaded stage {} with {} track elements over {}x{}",
              self.stage_name, self.trackers.len(),
              stage.extent_x, stage.extent_z);
        Ok(())
    }

    /// Register a car whose history starts at `initial`. Returns the car
    /// index.
    pub fn add_car(&mut self, initial: Sample) -> usize {
        self.cars.push(History::new(initial));
        self.cars.len() - 1
    }

    pub fn car_count(&self) -> usize {
        self.cars.len()
    }

    /// The sample history of car `car`.
    pub fn car(&self, car: usize) -> History {
        self.cars[car]
    }

    /// Record a fixed-step sample for car `car`.
    ///
    /// Rotation components are capped here so a NaN escaping the dynamics
    /// integration never reaches the render blend or the spatial index.
    pub fn record_sample(&mut self, car: usize, mut sample: Sample) {
        sample.rot.x = sample.rot.x.cap();
        sample.rot.y = sample.rot.y.cap();
        sample.rot.z = sample.rot.z.cap();
        self.cars[car].push(sample);
    }
}

#[cfg(test)]
mod test {
    use std::f32;

    use cg::vec3;

    use physics::stage::{ElementDef, StageDef};
    use physics::trackers::ElementFlags;
    use super::*;

    fn ring_stage(name: &str, n: usize) -> StageDef {
        let mut stage = StageDef::new(name, 9500, 9500);
        for i in 0..n {
            stage.elements.push(ElementDef {
                pos: vec3(100 * i as i32, 0, 200),
                rot: vec3(0, 0, 0),
                skid: 1,
                damage: if 0 == i { 167 } else { 0 },
                flags: ElementFlags::empty(),
            });
        }
        stage
    }

    #[test]
    fn load_populates_and_divides() {
        let mut world = World::new();
        world.load_stage(&ring_stage("alpha", 8)).unwrap();
        assert_eq!(8, world.trackers.len());
        assert_eq!((2, 2), world.trackers.sector_max());
        assert_eq!("alpha", world.stage_name());
        // Alias damage ids are normalised during the load.
        assert_eq!(1, world.trackers.damage(0));
    }

    #[test]
    fn reload_replaces_the_population() {
        let mut world = World::new();
        world.load_stage(&ring_stage("alpha", 8)).unwrap();
        world.load_stage(&ring_stage("beta", 3)).unwrap();
        assert_eq!(3, world.trackers.len());
        assert_eq!("beta", world.stage_name());
    }

    #[test]
    fn invalid_stage_leaves_the_world_untouched() {
        let mut world = World::new();
        world.load_stage(&ring_stage("alpha", 8)).unwrap();

        let mut bad = ring_stage("beta", 2);
        bad.elements[1].damage = -1;
        assert!(world.load_stage(&bad).is_err());

        assert_eq!(8, world.trackers.len());
        assert_eq!("alpha", world.stage_name());
    }

    #[test]
    fn recorded_samples_are_capped() {
        let mut world = World::new();
        let car = world.add_car(Sample::new(vec3(0, 0, 0),
                                            vec3(0.0, 0.0, 0.0)));
        world.record_sample(car, Sample::new(
            vec3(10, 0, 10), vec3(f32::NAN, 45.0, f32::NAN)));

        let h = world.car(car);
        assert_eq!(0.0, h.current().rot.x);
        assert_eq!(45.0, h.current().rot.y);
        assert_eq!(0.0, h.current().rot.z);
    }

    #[test]
    fn worlds_are_independent() {
        let mut a = World::new();
        let mut b = World::new();
        a.load_stage(&ring_stage("alpha", 4)).unwrap();
        b.load_stage(&ring_stage("beta", 6)).unwrap();
        assert_eq!(4, a.trackers.len());
        assert_eq!(6, b.trackers.len());
    }
}
