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

//! Headless demonstration driver.
//!
//! Builds a small generated stage, loads it, and runs the simulation clock
//! over synthetic 16 ms frames so the output is deterministic. A real host
//! would substitute its render loop's wall-clock readings and draw from the
//! interpolated state instead of logging it.

extern crate cgmath as cg;
extern crate env_logger;
#[macro_use]
extern crate log;
extern crate redline;

use std::io;
use std::io::Write;
use std::process;

use cg::vec3;

use redline::physics::{Angle, Driver, ElementFlags, Sample, Scheduler,
                       StageDef, World};
use redline::physics::stage::ElementDef;
use redline::physics::xform;

const RING_ELEMENTS: usize = 24;
const RING_RADIUS: f32 = 9000.0;
const STAGE_EXTENT: i32 = 24_000;

/// Generate a ring of barriers around the stage centre, every other one
/// decorative.
fn demo_stage() -> StageDef {
    let mut xs = [0i32; RING_ELEMENTS];
    let mut zs = [0i32; RING_ELEMENTS];
    for i in 0..RING_ELEMENTS {
        let theta = Angle::new(i as f32 * (360.0 / RING_ELEMENTS as f32));
        xs[i] = (theta.cos() * RING_RADIUS) as i32;
        zs[i] = (theta.sin() * RING_RADIUS) as i32;
    }

    // Skew the whole ring a little, then move it over the stage centre.
    xform::rotate(&mut xs, &mut zs, 0, 0, Angle::new(7.5));
    xform::translate(&mut xs, STAGE_EXTENT / 2);
    xform::translate(&mut zs, STAGE_EXTENT / 2);

    let mut stage = StageDef::new("demo-ring", STAGE_EXTENT, STAGE_EXTENT);
    for i in 0..RING_ELEMENTS {
        stage.elements.push(ElementDef {
            pos: vec3(xs[i], 0, zs[i]),
            rot: vec3(0, i as i32 * (360 / RING_ELEMENTS as i32), 0),
            skid: 2,
            // Some older track data uses the alias damage id; the index
            // normalises it during the load.
            damage: if 0 == i % 6 { 167 } else { 0 },
            flags: if 0 == i % 2 {
                ElementFlags::empty()
            } else {
                ElementFlags::DECOR | ElementFlags::NOT_WALL
            },
        });
    }
    stage
}

/// A minimal host: one car driven in a circle around the stage centre.
struct Demo {
    world: World,
    car: usize,
    heading: Angle,
    x: f32,
    z: f32,
}

impl Demo {
    fn new(world: World, car: usize, x: f32, z: f32) -> Demo {
        Demo {
            world: world,
            car: car,
            heading: Angle::ZERO,
            x: x,
            z: z,
        }
    }
}

impl Driver for Demo {
    fn fixed_step(&mut self, apply_effects: bool) {
        self.heading += 2.5;
        self.x += self.heading.cos() * 120.0;
        self.z += self.heading.sin() * 120.0;

        if apply_effects {
            let near = self.world.trackers
                .ids_near(self.x as i32, self.z as i32);
            let walls = near.iter()
                .filter(|&&id| !self.world.trackers.not_wall(id))
                .count();
            debug!("{} elements near the car, {} solid", near.len(), walls);
        }

        let sample = Sample::new(vec3(self.x as i32, 0, self.z as i32),
                                 vec3(0.0, self.heading.deg(), 0.0));
        self.world.record_sample(self.car, sample);
    }

    fn present(&mut self, ratio: f32) {
        let history = self.world.car(self.car);
        debug!("render pose {:?} heading {:.1} (ratio {:.2})",
               history.position_at(ratio),
               history.rotation_at(ratio).y, ratio);
    }
}

fn main() {
    env_logger::init();

    let mut world = World::new();
    match world.load_stage(&demo_stage()) {
        Ok(()) => (),
        Err(e) => {
            writeln!(&mut io::stderr(), "Failed to load stage: {}", e)
                .unwrap();
            process::exit(70);
        },
    }

    let start = (STAGE_EXTENT / 2) as f32;
    let car = world.add_car(Sample::new(
        vec3(start as i32, 0, start as i32), vec3(0.0, 0.0, 0.0)));
    let mut demo = Demo::new(world, car, start, start);

    let mut sched = Scheduler::default_step();
    let mut total_steps = 0;
    for frame in 1i64..121 {
        total_steps += sched.tick(frame * 16, &mut demo);
    }

    let history = demo.world.car(car);
    let pose = history.position_at(sched.ratio());
    println!("{} fixed steps over 120 frames; car at ({}, {}) heading {:.1}",
             total_steps, pose.x, pose.z,
             history.rotation_at(sched.ratio()).y);
}
