//! Room placement and rasterization.

use glam::IVec2;
use mazewright_checked::ClosedRange;
use mazewright_geometry::prelude::*;
use mazewright_random::Rng;

use crate::map::Map;
use crate::params::BspParams;
use crate::tile::TileCategory;

/// Decides whether a region grows a room and, if so, samples its rect.
///
/// A region too small to hold a minimum room (after the border shift) is
/// skipped without touching the RNG. Otherwise the generation chance is
/// rolled, the room dimensions are drawn with the configured size bias,
/// and the room is placed uniformly inside the region shifted right and
/// down by the border.
pub(crate) fn plan_room(rng: &mut Rng, params: &BspParams, region: Rect) -> Option<Rect> {
    let border = params.border_size.get();
    let avail_w = region.width() - border;
    let avail_h = region.height() - border;

    if avail_w < params.room_w_range.lower() || avail_h < params.room_h_range.lower() {
        return None;
    }

    if rng.range(0, 99) >= params.room_generation_chance.get() {
        return None;
    }

    let width = rng.weighted_range(
        ClosedRange::new(params.room_w_range.lower(), avail_w),
        params.room_size_weight,
        params.room_size_variance,
    );
    let height = rng.weighted_range(
        ClosedRange::new(params.room_h_range.lower(), avail_h),
        params.room_size_weight,
        params.room_size_variance,
    );

    let x = region.left + border + rng.range(0, avail_w - width);
    let y = region.top + border + rng.range(0, avail_h - height);

    Some(Rect::from_size(IVec2::new(x, y), width, height))
}

/// Rasterizes `room` onto the map: floor inside, wall on the border.
///
/// A border cell whose three outside neighbours along that border are all
/// wall or door joins the neighbouring structure seamlessly: the wall is
/// omitted and the cell becomes floor, so abutting rooms share a single
/// wall line instead of doubling it.
pub(crate) fn write_room(map: &mut Map, room: Rect) {
    // A cell on two opposite borders would be wall and floor at once.
    debug_assert!(
        room.width() >= 2 && room.height() >= 2,
        "degenerate room rect {room:?}"
    );

    for y in room.top..room.bottom {
        for x in room.left..room.right {
            let p = IVec2::new(x, y);
            if !room.is_border(p) {
                map.set(x, y, TileCategory::Floor);
                continue;
            }

            let outside_row = if room.is_top(p) {
                Some(y - 1)
            } else if room.is_bottom(p) {
                Some(y + 1)
            } else {
                None
            };
            let outside_col = if room.is_left(p) {
                Some(x - 1)
            } else if room.is_right(p) {
                Some(x + 1)
            } else {
                None
            };

            let omit_row = outside_row.is_some_and(|oy| {
                joins_existing(map, [(x - 1, oy), (x, oy), (x + 1, oy)])
            });
            let omit_col = outside_col.is_some_and(|ox| {
                joins_existing(map, [(ox, y - 1), (ox, y), (ox, y + 1)])
            });

            let category = if omit_row || omit_col {
                TileCategory::Floor
            } else {
                TileCategory::Wall
            };
            map.set(x, y, category);
        }
    }
}

/// True if all three cells exist and already carry wall or door.
fn joins_existing(map: &Map, cells: [(i32, i32); 3]) -> bool {
    cells.into_iter().all(|(x, y)| {
        map.is_valid_position(x, y)
            && matches!(map.get(x, y), TileCategory::Wall | TileCategory::Door)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazewright_checked::MapSize;

    fn empty_map() -> Map {
        Map::new(MapSize::new(20), MapSize::new(20))
    }

    #[test]
    fn room_is_wall_ringed_floor() {
        let mut map = empty_map();
        let room = Rect::new(2, 3, 8, 9);

        write_room(&mut map, room);

        for y in 0..map.height() {
            for x in 0..map.width() {
                let p = IVec2::new(x, y);
                let expected = if !room.contains(p) {
                    TileCategory::Empty
                } else if room.is_border(p) {
                    TileCategory::Wall
                } else {
                    TileCategory::Floor
                };
                assert_eq!(map.get(x, y), expected, "at ({x}, {y})");
            }
        }
    }

    #[test]
    fn abutting_room_drops_its_doubled_wall() {
        let mut map = empty_map();
        let first = Rect::new(2, 2, 8, 8);
        let second = Rect::new(8, 2, 14, 8);

        write_room(&mut map, first);
        write_room(&mut map, second);

        // The second room's left column faces the first room's right wall
        // (all wall along the shared line), so its own wall is omitted
        // away from the corners.
        for y in 3..7 {
            assert_eq!(map.get(8, y), TileCategory::Floor, "at (8, {y})");
        }
        // The corner cells still look along the row axis into empty space.
        assert_eq!(map.get(8, 2), TileCategory::Wall);
        assert_eq!(map.get(8, 7), TileCategory::Wall);
        // The first room's wall line is intact.
        for y in 2..8 {
            assert_eq!(map.get(7, y), TileCategory::Wall, "at (7, {y})");
        }
    }

    #[test]
    fn room_at_map_corner_keeps_all_walls() {
        let mut map = empty_map();
        let room = Rect::new(0, 0, 6, 6);

        write_room(&mut map, room);

        for y in 0..6 {
            for x in 0..6 {
                let p = IVec2::new(x, y);
                let expected = if room.is_border(p) {
                    TileCategory::Wall
                } else {
                    TileCategory::Floor
                };
                assert_eq!(map.get(x, y), expected, "at ({x}, {y})");
            }
        }
    }

    fn plan_params() -> BspParams {
        BspParams::default().with_room_generation_chance(100)
    }

    #[test]
    fn planned_rooms_fit_their_region() {
        let mut rng = Rng::with_seed(77);
        let params = plan_params();
        let region = Rect::new(5, 5, 20, 22);

        for _ in 0..200 {
            let room = plan_room(&mut rng, &params, region).expect("chance is 100");
            assert!(region.contains_rect(room), "{room:?} outside {region:?}");
            assert!(room.width() >= params.room_w_range.lower());
            assert!(room.height() >= params.room_h_range.lower());
            assert!(room.width() <= region.width());
            assert!(room.height() <= region.height());
        }
    }

    #[test]
    fn border_shifts_rooms_right_and_down() {
        let mut rng = Rng::with_seed(77);
        let params = plan_params().with_border_size(2);
        let region = Rect::new(0, 0, 15, 15);

        for _ in 0..200 {
            let room = plan_room(&mut rng, &params, region).expect("chance is 100");
            assert!(room.left >= region.left + 2);
            assert!(room.top >= region.top + 2);
            assert!(room.right <= region.right);
            assert!(room.bottom <= region.bottom);
        }
    }

    #[test]
    fn undersized_region_skips_without_drawing() {
        let mut rng1 = Rng::with_seed(5);
        let mut rng2 = Rng::with_seed(5);
        let params = plan_params();
        let region = Rect::new(0, 0, 3, 10);

        assert_eq!(plan_room(&mut rng1, &params, region), None);
        // Nothing was consumed from the stream.
        assert_eq!(rng1.range(0, 1000), rng2.range(0, 1000));
    }

    #[test]
    fn zero_chance_never_plans() {
        let mut rng = Rng::with_seed(5);
        let params = BspParams::default().with_room_generation_chance(0);
        let region = Rect::new(0, 0, 15, 15);

        for _ in 0..100 {
            assert_eq!(plan_room(&mut rng, &params, region), None);
        }
    }
}
