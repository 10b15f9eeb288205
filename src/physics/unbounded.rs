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

//! A dense growable array with default-on-miss reads.
//!
//! The track element attribute columns are addressed by element id with no
//! up-front bound. Element ids may also be queried speculatively (e.g. by a
//! sector scan) before anything has been written at them, so an
//! out-of-range read is not an error here: it yields the type's default
//! value. Writes past the end grow the storage, zero-filling the gap;
//! growth amortises by at least doubling via the underlying `Vec`.

/// Growable array of `T` indexed without bounds, backed by a `Vec`.
#[derive(Clone, Debug)]
pub struct Unbounded<T> {
    items: Vec<T>,
}

impl<T: Copy + Default> Unbounded<T> {
    pub fn new() -> Unbounded<T> {
        Unbounded { items: Vec::new() }
    }

    /// The number of slots actually materialised, i.e. one past the
    /// greatest index ever written.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Read slot `i`, or `T::default()` if `i` has never been written.
    #[inline]
    pub fn get(&self, i: usize) -> T {
        self.items.get(i).cloned().unwrap_or_default()
    }

    /// Write slot `i`, materialising and zero-filling any gap below it.
    pub fn set(&mut self, i: usize, v: T) {
        if i >= self.items.len() {
            self.items.resize(i + 1, T::default());
        }
        self.items[i] = v;
    }

    /// Append after the greatest index written so far.
    pub fn push(&mut self, v: T) {
        self.items.push(v);
    }

    /// Drop every slot.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T: Copy + Default> Default for Unbounded<T> {
    fn default() -> Unbounded<T> {
        Unbounded::new()
    }
}
