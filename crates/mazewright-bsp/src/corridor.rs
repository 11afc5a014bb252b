//! Corridor routing between connected regions.
//!
//! A corridor is dug as a chain of axis-aligned segments biased toward the
//! target. Each unit step is gated by a three-cell probe of the row or
//! column ahead, which is what lets a corridor pass through a one-cell
//! wall (leaving a door) while refusing to shave along wall faces or run
//! inside thick masonry.

use glam::IVec2;
use log::warn;
use mazewright_checked::{ClosedRange, PositiveF32};
use mazewright_direction::Direction;
use mazewright_geometry::prelude::*;
use mazewright_random::Rng;

use crate::map::Map;
use crate::params::BspParams;
use crate::tile::TileCategory;

/// Connection attempts before a corridor is abandoned.
const MAX_ATTEMPTS: u32 = 100;

/// Attempts between resets of the dig position to the starting room.
const RESTART_INTERVAL: u32 = 20;

/// Three-state answer of the tunnel probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Possible {
    No,
    Yes,
    Maybe,
}

/// Digs corridors into a map.
pub(crate) struct Digger<'a> {
    map: &'a mut Map,
    segment_range: ClosedRange,
    randomness: PositiveF32,
}

impl<'a> Digger<'a> {
    pub fn new(map: &'a mut Map, params: &BspParams) -> Self {
        Self {
            map,
            segment_range: params.corridor_segment_length_range,
            randomness: params.corridor_randomness,
        }
    }

    /// Digs a corridor from the center of `first` toward `second`,
    /// stopping once the dig position enters `second`.
    ///
    /// Both rects must lie inside `bounds`, the region whose split this
    /// connection heals. The route is a sequence of randomized segments;
    /// the pull toward the target is jittered more and more as attempts
    /// accumulate, and every [`RESTART_INTERVAL`] attempts the position
    /// resets to the start to shake off dead ends. After
    /// [`MAX_ATTEMPTS`] the connection is abandoned with a warning and
    /// the run continues.
    pub fn connect_rects(&mut self, rng: &mut Rng, bounds: Rect, first: Rect, second: Rect) {
        debug_assert!(
            bounds.contains_rect(first) && bounds.contains_rect(second),
            "connection endpoints {first:?}, {second:?} escape their region {bounds:?}"
        );

        let start = first.center();
        let target = second.center();
        let mut p = start;
        let mut attempts: u32 = 0;

        while !second.contains(p) {
            let reach = (attempts as f32 * self.randomness.get()).round() as i32;
            let jitter = if reach > 0 {
                IVec2::new(rng.range(-reach, reach), rng.range(-reach, reach))
            } else {
                IVec2::ZERO
            };

            let pull = target - p + jitter;
            let length = rng.range_in(self.segment_range);
            let dx = pull.x.clamp(-length, length);
            let dy = pull.y.clamp(-length, length);

            p = if rng.coin() {
                let q = self.tunnel(p, dx, 0);
                self.tunnel(q, 0, dy)
            } else {
                let q = self.tunnel(p, 0, dy);
                self.tunnel(q, dx, 0)
            };

            attempts += 1;
            if attempts == MAX_ATTEMPTS {
                warn!(
                    "abandoning corridor from {start} toward {target} after {MAX_ATTEMPTS} attempts"
                );
                break;
            }
            if attempts % RESTART_INTERVAL == 0 {
                p = start;
            }
        }
    }

    /// Digs a single segment of up to `|dx|` or `|dy|` unit steps from `p`
    /// and returns where the dig stopped. Exactly one delta may be
    /// nonzero.
    pub(crate) fn tunnel(&mut self, mut p: IVec2, dx: i32, dy: i32) -> IVec2 {
        debug_assert!(dx == 0 || dy == 0, "diagonal tunnel segment ({dx}, {dy})");

        let (dir, steps) = match (dx, dy) {
            (0, 0) => return p,
            (dx, 0) if dx > 0 => (Direction::East, dx),
            (dx, 0) => (Direction::West, -dx),
            (0, dy) if dy > 0 => (Direction::South, dy),
            (0, dy) => (Direction::North, -dy),
            _ => unreachable!(),
        };

        for _ in 0..steps {
            if !self.can_step(p, dir) {
                break;
            }
            let ahead = dir.apply(p);
            self.map.set_at(ahead, dig_transform(self.map.get_at(ahead)));
            p = ahead;
        }

        p
    }

    /// Resolves the probe for a step from `p`, looking one cell further
    /// when the probe answers maybe. Only a definite yes on the second
    /// probe lets the step through a wall line.
    fn can_step(&self, p: IVec2, dir: Direction) -> bool {
        match self.probe(p, dir) {
            Possible::Yes => true,
            Possible::No => false,
            Possible::Maybe => matches!(self.probe(dir.apply(p), dir), Possible::Yes),
        }
    }

    /// Probes the three cells fronting `base` in `dir`: the cell ahead and
    /// its two diagonal flanks.
    ///
    /// * Ahead off the map: no.
    /// * Ahead open (anything but wall): yes.
    /// * Ahead a wall flanked by walls on both sides: maybe, pending a
    ///   clean head-on crossing of the wall line.
    /// * Anything else (a flank open or off the map): no; digging there
    ///   would shave a wall corner open.
    fn probe(&self, base: IVec2, dir: Direction) -> Possible {
        let ahead = dir.apply(base);
        if !self.map.contains(ahead) {
            return Possible::No;
        }
        if self.map.get_at(ahead) != TileCategory::Wall {
            return Possible::Yes;
        }

        let (left, right) = dir.flanks();
        let (left, right) = (left.apply(base), right.apply(base));
        if !self.map.contains(left) || !self.map.contains(right) {
            return Possible::No;
        }

        if self.map.get_at(left) == TileCategory::Wall
            && self.map.get_at(right) == TileCategory::Wall
        {
            Possible::Maybe
        } else {
            Possible::No
        }
    }
}

/// How a cell changes when a corridor is dug over it.
fn dig_transform(value: TileCategory) -> TileCategory {
    match value {
        TileCategory::Empty => TileCategory::Corridor,
        TileCategory::Wall => TileCategory::Door,
        other => other,
    }
}
