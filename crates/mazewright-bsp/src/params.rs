//! Layout generation parameters.

use mazewright_checked::{
    AspectRatio, ClosedRange, MapSize, Percent, Positive, PositiveF32, SignedPercent,
};
use thiserror::Error;

/// Parameter combinations `BspParams::validate` rejects.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParamsError {
    /// Region minima of zero would let a split produce a child the same
    /// size as its parent, and the split sweep would never finish.
    #[error("region ranges must allow nothing smaller than 1x1, got {width}x{height} minima")]
    ZeroRegionMinimum {
        /// Configured minimum region width.
        width: i32,
        /// Configured minimum region height.
        height: i32,
    },
    /// Even the smallest allowed room cannot be placed on the map.
    #[error(
        "a minimum room of {room_w}x{room_h} plus border {border} cannot fit a {map_w}x{map_h} map"
    )]
    RoomCannotFitMap {
        /// Minimum room width.
        room_w: i32,
        /// Minimum room height.
        room_h: i32,
        /// Configured border size.
        border: i32,
        /// Map width.
        map_w: i32,
        /// Map height.
        map_h: i32,
    },
    /// A corridor segment length range topping out at zero digs nothing.
    #[error("corridor segment length range {0} can never produce a step")]
    DegenerateSegmentLength(ClosedRange),
}

/// Tuning knobs for a layout run.
///
/// All fields carry checked types, so any `BspParams` value is internally
/// consistent field by field; [`BspParams::validate`] checks the handful of
/// cross-field requirements. Build one with the `with_*` methods:
///
/// ```
/// use mazewright_bsp::BspParams;
///
/// let params = BspParams::default()
///     .with_map_size(80, 50)
///     .with_room_width_range(5, 12)
///     .with_room_generation_chance(75);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BspParams {
    /// Map width in cells.
    pub map_w: MapSize,
    /// Map height in cells.
    pub map_h: MapSize,

    /// Allowed room widths.
    pub room_w_range: ClosedRange,
    /// Allowed room heights.
    pub room_h_range: ClosedRange,

    /// Bias of sampled room sizes toward the small (-100) or large (100) end.
    pub room_size_weight: SignedPercent,
    /// Spread of sampled room sizes, tight (-100) to wide (100).
    pub room_size_variance: SignedPercent,

    /// Minimum spacing kept between a room and its region's top/left edges.
    pub border_size: Positive,

    /// Allowed region widths; regions wider than the upper bound are split.
    pub region_w_range: ClosedRange,
    /// Allowed region heights; regions taller than the upper bound are split.
    pub region_h_range: ClosedRange,

    /// Lengths a single corridor segment may take.
    pub corridor_segment_length_range: ClosedRange,

    /// Chance, per eligible region, of growing a room.
    pub room_generation_chance: Percent,
    /// Chance of splitting a region that is not forced to split.
    pub region_split_chance: Percent,

    /// Aspect ratio beyond which a region splits along its long dimension.
    pub split_aspect: AspectRatio,
    /// Aspect ratio beyond which a region must split.
    pub split_limit_aspect: AspectRatio,

    /// How strongly corridor segments wander as connection attempts mount.
    pub corridor_randomness: PositiveF32,
}

impl Default for BspParams {
    fn default() -> Self {
        let room_w_range = ClosedRange::positive(4, 25);
        let room_h_range = ClosedRange::positive(4, 25);
        let border_size = Positive::new(0);

        Self {
            map_w: MapSize::new(64),
            map_h: MapSize::new(64),
            region_w_range: derive_region_range(room_w_range, border_size),
            region_h_range: derive_region_range(room_h_range, border_size),
            room_w_range,
            room_h_range,
            room_size_weight: SignedPercent::new(0),
            room_size_variance: SignedPercent::new(0),
            border_size,
            corridor_segment_length_range: ClosedRange::positive(2, 10),
            room_generation_chance: Percent::new(50),
            region_split_chance: Percent::new(25),
            split_aspect: AspectRatio::new(5.0 / 4.0),
            split_limit_aspect: AspectRatio::new(16.0 / 10.0),
            corridor_randomness: PositiveF32::new(0.25),
        }
    }
}

/// Regions default to holding a minimum room plus its border, and cap out
/// at the largest allowed room.
fn derive_region_range(room_range: ClosedRange, border: Positive) -> ClosedRange {
    ClosedRange::positive(room_range.lower() + border.get(), room_range.upper())
}

impl BspParams {
    /// Creates the default parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the map dimensions.
    pub fn with_map_size(mut self, width: i32, height: i32) -> Self {
        self.map_w = MapSize::new(width);
        self.map_h = MapSize::new(height);
        self
    }

    /// Sets the allowed room widths and re-derives the region width range.
    pub fn with_room_width_range(mut self, lower: i32, upper: i32) -> Self {
        self.room_w_range = ClosedRange::positive(lower, upper);
        self.region_w_range = derive_region_range(self.room_w_range, self.border_size);
        self
    }

    /// Sets the allowed room heights and re-derives the region height range.
    pub fn with_room_height_range(mut self, lower: i32, upper: i32) -> Self {
        self.room_h_range = ClosedRange::positive(lower, upper);
        self.region_h_range = derive_region_range(self.room_h_range, self.border_size);
        self
    }

    /// Sets the room size bias.
    pub fn with_room_size_weight(mut self, weight: i32) -> Self {
        self.room_size_weight = SignedPercent::new(weight);
        self
    }

    /// Sets the room size spread.
    pub fn with_room_size_variance(mut self, variance: i32) -> Self {
        self.room_size_variance = SignedPercent::new(variance);
        self
    }

    /// Sets the room border spacing and re-derives both region ranges.
    pub fn with_border_size(mut self, border: i32) -> Self {
        self.border_size = Positive::new(border);
        self.region_w_range = derive_region_range(self.room_w_range, self.border_size);
        self.region_h_range = derive_region_range(self.room_h_range, self.border_size);
        self
    }

    /// Overrides the region width range derived from the room settings.
    pub fn with_region_width_range(mut self, lower: i32, upper: i32) -> Self {
        self.region_w_range = ClosedRange::positive(lower, upper);
        self
    }

    /// Overrides the region height range derived from the room settings.
    pub fn with_region_height_range(mut self, lower: i32, upper: i32) -> Self {
        self.region_h_range = ClosedRange::positive(lower, upper);
        self
    }

    /// Sets the allowed corridor segment lengths.
    pub fn with_corridor_segment_length_range(mut self, lower: i32, upper: i32) -> Self {
        self.corridor_segment_length_range = ClosedRange::positive(lower, upper);
        self
    }

    /// Sets the chance of growing a room in an eligible region.
    pub fn with_room_generation_chance(mut self, chance: i32) -> Self {
        self.room_generation_chance = Percent::new(chance);
        self
    }

    /// Sets the chance of splitting a region that is not forced to split.
    pub fn with_region_split_chance(mut self, chance: i32) -> Self {
        self.region_split_chance = Percent::new(chance);
        self
    }

    /// Sets the aspect ratio that picks the split axis.
    pub fn with_split_aspect(mut self, ratio: f32) -> Self {
        self.split_aspect = AspectRatio::new(ratio);
        self
    }

    /// Sets the aspect ratio that forces a split.
    pub fn with_split_limit_aspect(mut self, ratio: f32) -> Self {
        self.split_limit_aspect = AspectRatio::new(ratio);
        self
    }

    /// Sets how strongly corridors wander.
    pub fn with_corridor_randomness(mut self, randomness: f32) -> Self {
        self.corridor_randomness = PositiveF32::new(randomness);
        self
    }

    /// Checks the cross-field requirements a generation run relies on.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.region_w_range.lower() < 1 || self.region_h_range.lower() < 1 {
            return Err(ParamsError::ZeroRegionMinimum {
                width: self.region_w_range.lower(),
                height: self.region_h_range.lower(),
            });
        }

        let border = self.border_size.get();
        if self.room_w_range.lower() + border > self.map_w.get()
            || self.room_h_range.lower() + border > self.map_h.get()
        {
            return Err(ParamsError::RoomCannotFitMap {
                room_w: self.room_w_range.lower(),
                room_h: self.room_h_range.lower(),
                border,
                map_w: self.map_w.get(),
                map_h: self.map_h.get(),
            });
        }

        if self.corridor_segment_length_range.upper() < 1 {
            return Err(ParamsError::DegenerateSegmentLength(
                self.corridor_segment_length_range,
            ));
        }

        Ok(())
    }
}
