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

/*! The fixed-timestep simulation clock.

The host calls `tick` once per frame at whatever rate it manages; the
simulation only ever advances in whole `step_ms`-sized steps. Elapsed
wall-clock time accumulates between ticks and the accumulator is drained one
fixed step at a time, so simulation behavior is a function of total elapsed
time, not of how that time happened to be sliced into frames. The remainder
carries forward — time debt is never silently dropped.

There is no cap on steps drained per tick: a host stalled for a long
interval (breakpoint, suspend) catches up with a burst of whole steps rather
than skipping time, preserving determinism at the cost of one long frame.
A host that cannot tolerate the burst must bound it in its own `Driver`.

The wall-clock source is the host's; `tick` takes the current monotonic
millisecond reading rather than sampling a clock itself. Elapsed time is
signed, so a non-monotonic source shrinks the accumulator instead of
wrapping it.
*/

use physics::defs::STEP_MS;

/// The narrow seam between the clock and the host.
pub trait Driver {
    /// Advance the world by exactly one fixed step.
    ///
    /// `apply_effects` is true when the step may produce side effects
    /// (trigger volumes, skid marks, damage); the clock always passes true
    /// for the primary simulation pass.
    fn fixed_step(&mut self, apply_effects: bool);

    /// Present the current state. Called exactly once per tick, after the
    /// fixed steps drain, including ticks that drained zero steps.
    ///
    /// `ratio` is the fraction of the next fixed step already elapsed; the
    /// render path uses it to blend the last two simulation samples.
    fn present(&mut self, ratio: f32);
}

/// Accumulator-based fixed-timestep scheduler.
///
/// Two states: idle (no tick observed yet, `last_tick_ms == 0`) and
/// running. The first tick arms the clock and drains nothing, since no
/// elapsed time can be attributed yet.
#[derive(Clone, Copy, Debug)]
pub struct Scheduler {
    step_ms: i64,
    accumulator: i64,
    last_tick_ms: i64,
}

impl Scheduler {
    /// Create a clock with the given step size. `step_ms` must be
    /// positive.
    pub fn new(step_ms: i64) -> Scheduler {
        assert!(step_ms > 0, "non-positive step size: {}", step_ms);
        Scheduler {
            step_ms: step_ms,
            accumulator: 0,
            last_tick_ms: 0,
        }
    }

    /// Create a clock with the standard step size.
    pub fn default_step() -> Scheduler {
        Scheduler::new(STEP_MS)
    }

    pub fn step_ms(&self) -> i64 {
        self.step_ms
    }

    /// Unsimulated time debt carried to the next tick.
    pub fn accumulator_ms(&self) -> i64 {
        self.accumulator
    }

    /// Fraction of the next fixed step already elapsed.
    #[inline]
    pub fn ratio(&self) -> f32 {
        self.accumulator as f32 / self.step_ms as f32
    }

    /// Advance the clock to `now_ms`, draining whole fixed steps into the
    /// driver and then presenting once. Returns the number of steps run.
    pub fn tick<D: Driver>(&mut self, now_ms: i64, driver: &mut D) -> u32 {
        if 0 == self.last_tick_ms {
            self.last_tick_ms = now_ms;
        }
        self.accumulator += now_ms - self.last_tick_ms;

        let mut steps = 0;
        while self.accumulator >= self.step_ms {
            self.accumulator -= self.step_ms;
            driver.fixed_step(true);
            steps += 1;
        }

        driver.present(self.ratio());
        self.last_tick_ms = now_ms;
        steps
    }
}
