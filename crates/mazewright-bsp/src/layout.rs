//! The layout driver: split sweep, room pass, connection pass.

use mazewright_geometry::prelude::*;
use mazewright_random::Rng;

use crate::corridor::Digger;
use crate::map::Map;
use crate::params::BspParams;
use crate::rooms::{plan_room, write_room};
use crate::split::{self, SplitKind};
use crate::tree::Node;

/// Generates dungeon layouts by binary space partitioning.
///
/// A layout owns its region tree and room list; a call to
/// [`BspLayout::generate`] resets both, partitions the map into regions,
/// grows rooms in some of the terminal regions, rasterizes them, and digs
/// corridors between sibling subtrees. The RNG is borrowed for the run, so
/// the same seed and parameters always reproduce the same map.
///
/// # Example
///
/// ```
/// use mazewright_bsp::{BspLayout, BspParams};
/// use mazewright_random::Rng;
///
/// let mut rng = Rng::with_seed(1984);
/// let mut layout = BspLayout::new(BspParams::default());
/// let map = layout.generate(&mut rng);
///
/// assert_eq!(map.width(), 64);
/// assert!(!layout.rooms().is_empty());
/// ```
#[derive(Debug)]
pub struct BspLayout {
    params: BspParams,
    nodes: Vec<Node>,
    rooms: Vec<Rect>,
}

impl BspLayout {
    /// Creates a layout generator with the given parameters.
    ///
    /// # Panics
    ///
    /// Panics if the parameters fail [`BspParams::validate`]; call that
    /// first when the parameters come from untrusted input.
    pub fn new(params: BspParams) -> Self {
        if let Err(error) = params.validate() {
            panic!("invalid layout parameters: {error}");
        }

        Self {
            params,
            nodes: Vec::new(),
            rooms: Vec::new(),
        }
    }

    /// The parameters this layout generates with.
    pub fn params(&self) -> &BspParams {
        &self.params
    }

    /// The rooms of the last generated map.
    pub fn rooms(&self) -> &[Rect] {
        &self.rooms
    }

    /// The terminal region bounds of the last generated map.
    ///
    /// Useful for debug overlays; the regions tile the map exactly.
    pub fn regions(&self) -> Vec<Rect> {
        self.nodes
            .iter()
            .filter(|node| node.is_leaf())
            .map(|node| node.bounds)
            .collect()
    }

    /// Generates a map, replacing any state from a previous run.
    pub fn generate(&mut self, rng: &mut Rng) -> Map {
        self.nodes.clear();
        self.rooms.clear();

        let mut map = Map::new(self.params.map_w, self.params.map_h);
        self.nodes
            .push(Node::leaf(Rect::new(0, 0, map.width(), map.height())));

        // Index-based sweep: splitting appends children, which the sweep
        // then visits in turn. Every child is strictly smaller than its
        // parent on one axis, so the sweep terminates.
        let mut index = 0;
        while index < self.nodes.len() {
            self.split_node(rng, index);
            index += 1;
        }

        self.plan_rooms(rng);

        for node in &self.nodes {
            if let Some(room) = node.room() {
                write_room(&mut map, self.rooms[room]);
            }
        }

        let mut digger = Digger::new(&mut map, &self.params);
        self.connect(rng, &mut digger, 0);

        map
    }

    /// Splits `nodes[index]` in place if it should and can be split.
    fn split_node(&mut self, rng: &mut Rng, index: usize) {
        debug_assert!(self.nodes[index].is_leaf(), "sweep reached a split node");

        let bounds = self.nodes[index].bounds;
        if !self.should_split(rng, bounds) {
            return;
        }

        let min_w = self.params.region_w_range.lower();
        let min_h = self.params.region_h_range.lower();

        let kind = split::split_kind(rng, bounds, min_w, min_h, self.params.split_aspect.get());
        let (kind, first, second) = split::split_rect(rng, bounds, kind, min_w, min_h);
        if kind == SplitKind::None {
            return;
        }

        let child = self.nodes.len();
        self.nodes.push(Node::leaf(first));
        self.nodes.push(Node::leaf(second));
        self.nodes[index].set_children(child, child + 1);
    }

    /// A region must split while it exceeds the configured maxima or is
    /// too elongated; anything else splits by chance.
    fn should_split(&self, rng: &mut Rng, bounds: Rect) -> bool {
        let params = &self.params;

        if bounds.width() > params.region_w_range.upper()
            || bounds.height() > params.region_h_range.upper()
        {
            return true;
        }
        if aspect(bounds) > params.split_limit_aspect.get() {
            return true;
        }

        rng.range(0, 99) < params.region_split_chance.get()
    }

    /// Rolls a room for every terminal region, in arena order.
    fn plan_rooms(&mut self, rng: &mut Rng) {
        for index in 0..self.nodes.len() {
            if !self.nodes[index].is_leaf() {
                continue;
            }
            if let Some(room) = plan_room(rng, &self.params, self.nodes[index].bounds) {
                self.rooms.push(room);
                self.nodes[index].set_room(self.rooms.len() - 1);
            }
        }
    }

    /// Connects the subtree under `index` and reports a representative
    /// rect for it: a room if the subtree has one, its bounds otherwise.
    ///
    /// Siblings that both contain rooms are joined by a corridor between
    /// their representatives; a fair coin picks which representative the
    /// parent advertises upward.
    fn connect(&self, rng: &mut Rng, digger: &mut Digger<'_>, index: usize) -> (bool, Rect) {
        let node = &self.nodes[index];
        let Some((first, second)) = node.children() else {
            return match node.room() {
                Some(room) => (true, self.rooms[room]),
                None => (false, node.bounds),
            };
        };

        let (has_a, rect_a) = self.connect(rng, digger, first);
        let (has_b, rect_b) = self.connect(rng, digger, second);

        match (has_a, has_b) {
            (true, true) => {
                digger.connect_rects(rng, node.bounds, rect_a, rect_b);
                if rng.coin() {
                    (true, rect_a)
                } else {
                    (true, rect_b)
                }
            }
            (true, false) => (true, rect_a),
            (false, true) => (true, rect_b),
            (false, false) => (false, node.bounds),
        }
    }
}

impl Default for BspLayout {
    fn default() -> Self {
        Self::new(BspParams::default())
    }
}

/// Long-to-short side ratio of a non-empty rect.
fn aspect(rect: Rect) -> f32 {
    let long = rect.width().max(rect.height());
    let short = rect.width().min(rect.height());
    long as f32 / short as f32
}
