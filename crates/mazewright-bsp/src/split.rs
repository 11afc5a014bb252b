//! Primitives for cutting a region into two adjoining children.

use mazewright_geometry::prelude::*;
use mazewright_random::Rng;

/// The axis a region is cut along, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SplitKind {
    /// The region cannot be cut.
    None,
    /// Cut along a vertical line, producing left and right children.
    Vertical,
    /// Cut along a horizontal line, producing top and bottom children.
    Horizontal,
}

/// Decides the axis to cut `rect` along.
///
/// A cut is possible on an axis when both children can keep the minimum
/// dimension; if only one axis qualifies, that axis wins. When both
/// qualify, a rect whose long-to-short side ratio exceeds `threshold` is
/// cut across its long dimension, and anything closer to square gets a
/// fair coin flip.
pub fn split_kind(rng: &mut Rng, rect: Rect, min_w: i32, min_h: i32, threshold: f32) -> SplitKind {
    debug_assert!(min_w >= 0 && min_h >= 0);
    debug_assert!(threshold >= 1.0);

    let can_v = rect.width() >= 2 * min_w;
    let can_h = rect.height() >= 2 * min_h;

    match (can_v, can_h) {
        (false, false) => SplitKind::None,
        (true, false) => SplitKind::Vertical,
        (false, true) => SplitKind::Horizontal,
        (true, true) => {
            let is_wider = rect.width() >= rect.height();
            let (long, short) = if is_wider {
                (rect.width(), rect.height())
            } else {
                (rect.height(), rect.width())
            };

            if long as f32 / short as f32 > threshold {
                if is_wider {
                    SplitKind::Vertical
                } else {
                    SplitKind::Horizontal
                }
            } else if rng.coin() {
                SplitKind::Vertical
            } else {
                SplitKind::Horizontal
            }
        }
    }
}

/// Cuts `rect` along `kind` at a uniformly chosen position that leaves
/// both children their minimum dimension.
///
/// Returns the effective kind and the two children. When the rect turns
/// out to be too small for the requested cut (or `kind` is `None`), the
/// result is `(None, rect, rect)` and nothing is drawn from `rng`. The
/// children share exactly one edge and their union is `rect`.
pub fn split_rect(
    rng: &mut Rng,
    rect: Rect,
    kind: SplitKind,
    min_w: i32,
    min_h: i32,
) -> (SplitKind, Rect, Rect) {
    debug_assert!(min_w >= 0 && min_h >= 0);

    match kind {
        SplitKind::None => (SplitKind::None, rect, rect),
        SplitKind::Vertical => {
            if rect.width() < 2 * min_w {
                return (SplitKind::None, rect, rect);
            }
            let cut = rng.range(rect.left + min_w, rect.right - min_w);
            (
                SplitKind::Vertical,
                Rect::new(rect.left, rect.top, cut, rect.bottom),
                Rect::new(cut, rect.top, rect.right, rect.bottom),
            )
        }
        SplitKind::Horizontal => {
            if rect.height() < 2 * min_h {
                return (SplitKind::None, rect, rect);
            }
            let cut = rng.range(rect.top + min_h, rect.bottom - min_h);
            (
                SplitKind::Horizontal,
                Rect::new(rect.left, rect.top, rect.right, cut),
                Rect::new(rect.left, cut, rect.right, rect.bottom),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN_W: i32 = 4;
    const MIN_H: i32 = 5;

    #[test]
    fn too_small_to_split() {
        let mut rng = Rng::with_seed(1001);
        let rect = Rect::new(0, 0, MIN_W, MIN_H);

        assert_eq!(
            split_kind(&mut rng, rect, MIN_W, MIN_H, 1.0),
            SplitKind::None
        );

        let (kind, first, second) = split_rect(&mut rng, rect, SplitKind::Vertical, MIN_W, MIN_H);
        assert_eq!(kind, SplitKind::None);
        assert_eq!(first, rect);
        assert_eq!(second, rect);
    }

    #[test]
    fn tall_rect_splits_horizontally() {
        let mut rng = Rng::with_seed(1001);
        let rect = Rect::new(0, 0, 10, 11);

        assert_eq!(
            split_kind(&mut rng, rect, MIN_W, MIN_H, 1.0),
            SplitKind::Horizontal
        );
    }

    #[test]
    fn wide_rect_splits_vertically() {
        let mut rng = Rng::with_seed(1001);
        let rect = Rect::new(0, 0, 11, 10);

        assert_eq!(
            split_kind(&mut rng, rect, MIN_W, MIN_H, 1.0),
            SplitKind::Vertical
        );
    }

    #[test]
    fn single_viable_axis_wins() {
        let mut rng = Rng::with_seed(1001);

        // Too short to cut horizontally, wide enough to cut vertically.
        let wide = Rect::new(0, 0, 20, MIN_H);
        assert_eq!(
            split_kind(&mut rng, wide, MIN_W, MIN_H, 1.0),
            SplitKind::Vertical
        );

        let tall = Rect::new(0, 0, MIN_W, 20);
        assert_eq!(
            split_kind(&mut rng, tall, MIN_W, MIN_H, 1.0),
            SplitKind::Horizontal
        );
    }

    #[test]
    fn square_rect_flips_a_coin() {
        let mut rng = Rng::with_seed(1001);
        let rect = Rect::new(0, 0, 10, 10);

        let mut vertical = false;
        let mut horizontal = false;

        for _ in 0..100 {
            match split_kind(&mut rng, rect, MIN_W, MIN_H, 1.0) {
                SplitKind::None => panic!("square rect must be splittable"),
                SplitKind::Vertical => vertical = true,
                SplitKind::Horizontal => horizontal = true,
            }
            if vertical && horizontal {
                return;
            }
        }

        panic!("coin flip never picked both axes");
    }

    #[test]
    fn vertical_split_partitions_the_rect() {
        let mut rng = Rng::with_seed(1001);
        let rect = Rect::new(0, 0, 100, 100);

        for _ in 0..100 {
            let (kind, first, second) =
                split_rect(&mut rng, rect, SplitKind::Vertical, MIN_W, MIN_H);

            assert_eq!(kind, SplitKind::Vertical);

            assert_eq!(first.left, rect.left);
            assert_eq!(first.top, rect.top);
            assert_eq!(first.bottom, rect.bottom);

            assert_eq!(second.right, rect.right);
            assert_eq!(second.top, rect.top);
            assert_eq!(second.bottom, rect.bottom);

            // The children abut on a single shared edge.
            assert_eq!(first.right, second.left);
            assert_eq!(first.width() + second.width(), rect.width());

            assert!(first.width() >= MIN_W);
            assert!(second.width() >= MIN_W);
        }
    }

    #[test]
    fn horizontal_split_partitions_the_rect() {
        let mut rng = Rng::with_seed(1001);
        let rect = Rect::new(0, 0, 100, 100);

        for _ in 0..100 {
            let (kind, first, second) =
                split_rect(&mut rng, rect, SplitKind::Horizontal, MIN_W, MIN_H);

            assert_eq!(kind, SplitKind::Horizontal);

            assert_eq!(first.left, rect.left);
            assert_eq!(first.right, rect.right);
            assert_eq!(first.top, rect.top);

            assert_eq!(second.left, rect.left);
            assert_eq!(second.right, rect.right);
            assert_eq!(second.bottom, rect.bottom);

            assert_eq!(first.bottom, second.top);
            assert_eq!(first.height() + second.height(), rect.height());

            assert!(first.height() >= MIN_H);
            assert!(second.height() >= MIN_H);
        }
    }

    #[test]
    fn split_works_away_from_the_origin() {
        let mut rng = Rng::with_seed(1011);
        let rect = Rect::new(-10, -20, 10, 20);

        let (kind, first, second) = split_rect(&mut rng, rect, SplitKind::Horizontal, 5, 10);

        assert_eq!(kind, SplitKind::Horizontal);
        assert!(first.height() >= 10);
        assert!(second.height() >= 10);
        assert_eq!(first.bottom, second.top);
    }
}
