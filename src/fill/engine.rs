//! Generic flood fill traversal.
//!
//! The engine seeds an ordering structure with the start pixel, then keeps
//! removing pixels and probing their neighbors (right, down, left, up, in that
//! order). A neighbor is filled when its distance to the seed's *original*
//! color is strictly below the tolerance. Colors come from the picker at
//! discovery time, and a frame is captured every `frame_interval` fills.
//!
//! The neighbor order is part of the output: two fills that probe neighbors in
//! a different order end with the same image but different frame sequences.

use log::{debug, trace};
use ndarray::Array2;

use super::animation::Animation;
use super::ordering::OrderingStructure;
use super::picker::ColorPicker;
use crate::error::{FillError, Result};
use crate::image::{HslaPixel, Image, Point};

/// Flood fill `image` from `(x, y)`, exploring in the order defined by `O`.
///
/// # Arguments
/// * `image` - Image to fill in place
/// * `x`, `y` - Seed coordinate, must lie inside the image
/// * `picker` - Source of the replacement color for every filled pixel
/// * `tolerance` - Pixels closer than this (strictly) to the seed color are filled
/// * `frame_interval` - Capture a frame after every `frame_interval` fills
///
/// # Returns
/// The animation: the seed frame, one frame per `frame_interval` fills, and a
/// final frame of the finished image.
pub fn fill<O, P>(
    image: &mut Image,
    x: usize,
    y: usize,
    picker: &P,
    tolerance: f64,
    frame_interval: usize,
) -> Result<Animation>
where
    O: OrderingStructure<Point> + Default,
    P: ColorPicker + ?Sized,
{
    if frame_interval == 0 {
        return Err(FillError::InvalidFrameInterval);
    }

    FillEngine::<O, P>::new(image, Point::new(x, y), picker, tolerance, frame_interval)?.run()
}

/// State of one fill invocation.
struct FillEngine<'a, O, P: ?Sized> {
    image: &'a mut Image,
    picker: &'a P,
    seed: Point,
    reference: HslaPixel,
    tolerance: f64,
    frame_interval: usize,
    pending: O,
    visited: Array2<bool>,
    filled: usize,
    animation: Animation,
}

impl<'a, O, P> FillEngine<'a, O, P>
where
    O: OrderingStructure<Point> + Default,
    P: ColorPicker + ?Sized,
{
    fn new(
        image: &'a mut Image,
        seed: Point,
        picker: &'a P,
        tolerance: f64,
        frame_interval: usize,
    ) -> Result<Self> {
        let reference = *image.pixel(seed.x, seed.y).ok_or(FillError::SeedOutOfBounds {
            x: seed.x,
            y: seed.y,
            width: image.width(),
            height: image.height(),
        })?;
        let visited = Array2::from_elem((image.height(), image.width()), false);

        Ok(Self {
            image,
            picker,
            seed,
            reference,
            tolerance,
            frame_interval,
            pending: O::default(),
            visited,
            filled: 0,
            animation: Animation::new(),
        })
    }

    fn run(mut self) -> Result<Animation> {
        debug!(
            "Flood fill from ({}, {}) on {}x{} image, tolerance {}, frame interval {}",
            self.seed.x,
            self.seed.y,
            self.image.width(),
            self.image.height(),
            self.tolerance,
            self.frame_interval,
        );

        self.recolor(self.seed);
        self.pending.add(self.seed);
        self.visited[[self.seed.y, self.seed.x]] = true;
        self.animation.add_frame(self.image);
        self.filled = 0;

        while let Some(current) = self.pending.remove() {
            for neighbor in current.neighbors().into_iter().flatten() {
                self.visit(neighbor);
            }
        }

        self.animation.add_frame(self.image);

        debug!(
            "Flood fill done: {} pixels filled, {} frames",
            self.filled,
            self.animation.len()
        );
        Ok(self.animation)
    }

    /// Probe one neighbor: fill it if it matches, and never look at it again.
    fn visit(&mut self, point: Point) {
        if !self.image.contains(point) || self.visited[[point.y, point.x]] {
            return;
        }
        self.visited[[point.y, point.x]] = true;

        let matches = self.reference.dist(&self.image[point]) < self.tolerance;
        if !matches {
            return;
        }

        self.recolor(point);
        self.pending.add(point);
        self.filled += 1;

        if self.filled % self.frame_interval == 0 {
            trace!("Frame {} after {} fills", self.animation.len(), self.filled);
            self.animation.add_frame(self.image);
        }
    }

    fn recolor(&mut self, point: Point) {
        self.image[point] = self.picker.pick(point.x, point.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fill::ordering::{Queue, Stack};
    use crate::fill::picker::{GridPicker, SolidPicker};
    use std::cell::Cell;
    use test_log::test;

    const GRAY: HslaPixel = HslaPixel::hsl(0.0, 0.0, 0.5);
    const RED: HslaPixel = HslaPixel::hsl(0.0, 1.0, 0.5);
    const GREEN: HslaPixel = HslaPixel::hsl(120.0, 1.0, 0.5);

    /// Coordinates that changed between consecutive frames.
    fn fill_sequence(animation: &Animation) -> Vec<Point> {
        let frames = animation.frames();
        let mut sequence = Vec::new();
        for pair in frames.windows(2) {
            for ((y, x), before) in pair[0].pixels().indexed_iter() {
                if pair[1].pixels()[[y, x]] != *before {
                    sequence.push(Point::new(x, y));
                }
            }
        }
        sequence
    }

    fn count_color(image: &Image, color: HslaPixel) -> usize {
        image.pixels().iter().filter(|&&p| p == color).count()
    }

    #[test]
    fn test_uniform_5x5_fill() {
        let mut image = Image::new(5, 5, GRAY);
        let animation = fill::<Stack<Point>, _>(&mut image, 2, 2, &SolidPicker::new(RED), 1.0, 1).unwrap();

        assert_eq!(animation.len(), 26);
        assert_eq!(count_color(&image, RED), 25);
        assert_eq!(animation.last_frame(), Some(&image));
        // Final frame duplicates the last fill frame
        assert_eq!(animation.frame(24), animation.frame(25));
    }

    #[test]
    fn test_seed_frame_is_snapshot() {
        let mut image = Image::new(4, 4, GRAY);
        let animation = fill::<Queue<Point>, _>(&mut image, 1, 1, &SolidPicker::new(RED), 0.5, 100).unwrap();

        let first = animation.frame(0).unwrap();
        assert_eq!(first.pixel(1, 1), Some(&RED));
        assert_eq!(count_color(first, RED), 1);
        assert_eq!(count_color(&image, RED), 16);
    }

    #[test]
    fn test_bfs_order_3x3() {
        let mut image = Image::new(3, 3, GRAY);
        let animation = fill::<Queue<Point>, _>(&mut image, 1, 1, &SolidPicker::new(RED), 0.5, 1).unwrap();

        let expected: Vec<Point> = [(2, 1), (1, 2), (0, 1), (1, 0), (2, 2), (2, 0), (0, 2), (0, 0)]
            .into_iter()
            .map(Point::from)
            .collect();
        assert_eq!(fill_sequence(&animation), expected);
    }

    #[test]
    fn test_dfs_order_3x3() {
        let mut image = Image::new(3, 3, GRAY);
        let animation = fill::<Stack<Point>, _>(&mut image, 1, 1, &SolidPicker::new(RED), 0.5, 1).unwrap();

        let expected: Vec<Point> = [(2, 1), (1, 2), (0, 1), (1, 0), (2, 0), (0, 0), (0, 2), (2, 2)]
            .into_iter()
            .map(Point::from)
            .collect();
        assert_eq!(fill_sequence(&animation), expected);
    }

    /// Ordering that only knows the three operations the engine calls.
    #[derive(Default)]
    struct Pile(Vec<Point>);

    impl OrderingStructure<Point> for Pile {
        fn add(&mut self, item: Point) {
            self.0.push(item);
        }

        fn remove(&mut self) -> Option<Point> {
            self.0.pop()
        }

        fn is_empty(&self) -> bool {
            self.0.is_empty()
        }
    }

    #[test]
    fn test_custom_ordering_matches_stack() {
        let mut pile_image = Image::new(5, 4, GRAY);
        let mut stack_image = pile_image.clone();
        let picker = SolidPicker::new(GREEN);

        let pile = fill::<Pile, _>(&mut pile_image, 2, 1, &picker, 0.5, 1).unwrap();
        let stack = fill::<Stack<Point>, _>(&mut stack_image, 2, 1, &picker, 0.5, 1).unwrap();

        assert_eq!(pile, stack);
        assert_eq!(pile_image, stack_image);
    }

    #[test]
    fn test_dfs_and_bfs_agree_on_final_image() {
        let mut dfs_image = Image::new(6, 4, GRAY);
        let mut bfs_image = dfs_image.clone();
        let picker = SolidPicker::new(GREEN);

        let dfs = fill::<Stack<Point>, _>(&mut dfs_image, 0, 0, &picker, 0.5, 1).unwrap();
        let bfs = fill::<Queue<Point>, _>(&mut bfs_image, 0, 0, &picker, 0.5, 1).unwrap();

        assert_eq!(dfs_image, bfs_image);
        assert_eq!(dfs.len(), bfs.len());
        assert_ne!(dfs, bfs);
    }

    #[test]
    fn test_deterministic_frames() {
        let source = Image::from_fn(7, 5, |x, y| HslaPixel::hsl(0.0, 0.0, if (x + y) % 5 == 0 { 0.0 } else { 0.5 }));
        let picker = GridPicker::new(RED, 3).unwrap();

        let mut a = source.clone();
        let mut b = source.clone();
        let first = fill::<Stack<Point>, _>(&mut a, 3, 2, &picker, 0.1, 2).unwrap();
        let second = fill::<Stack<Point>, _>(&mut b, 3, 2, &picker, 0.1, 2).unwrap();
        assert_eq!(first, second);

        let mut c = source.clone();
        let mut d = source;
        let first = fill::<Queue<Point>, _>(&mut c, 3, 2, &picker, 0.1, 2).unwrap();
        let second = fill::<Queue<Point>, _>(&mut d, 3, 2, &picker, 0.1, 2).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_frame_cadence() {
        // 4x4 uniform: 15 fills after the seed
        for interval in 1..=16 {
            let mut image = Image::new(4, 4, GRAY);
            let animation = fill::<Queue<Point>, _>(&mut image, 0, 0, &SolidPicker::new(RED), 0.5, interval).unwrap();
            assert_eq!(animation.len(), 2 + 15 / interval, "interval {}", interval);
        }
    }

    #[test]
    fn test_tolerance_boundary_is_exclusive() {
        let other = HslaPixel::hsl(30.0, 0.4, 0.6);
        let image = Image::from_fn(2, 1, |x, _| if x == 0 { GRAY } else { other });
        let distance = GRAY.dist(&other);
        assert!(distance > 0.0);

        let mut at_boundary = image.clone();
        let animation = fill::<Stack<Point>, _>(&mut at_boundary, 0, 0, &SolidPicker::new(RED), distance, 1).unwrap();
        assert_eq!(at_boundary.pixel(1, 0), Some(&other));
        assert_eq!(animation.len(), 2);

        let mut inside = image;
        let animation = fill::<Stack<Point>, _>(&mut inside, 0, 0, &SolidPicker::new(RED), distance + 1e-9, 1).unwrap();
        assert_eq!(inside.pixel(1, 0), Some(&RED));
        assert_eq!(animation.len(), 3);
    }

    #[test]
    fn test_tolerance_uses_original_seed_color() {
        // The seed is recolored to match its neighbors, which must still be
        // compared against the gray it started as.
        let dark = HslaPixel::hsl(0.0, 0.0, 0.0);
        let mut image = Image::from_fn(3, 1, |x, _| if x == 0 { GRAY } else { dark });
        let animation = fill::<Stack<Point>, _>(&mut image, 0, 0, &SolidPicker::new(dark), 0.1, 1).unwrap();

        assert_eq!(animation.len(), 2);
        assert!(fill_sequence(&animation).is_empty());
        assert!(image.pixels().iter().all(|&p| p == dark));
    }

    #[test]
    fn test_no_op_fill() {
        let mut image = Image::from_fn(3, 3, |x, y| HslaPixel::hsl(0.0, 0.0, (x + 3 * y) as f64 / 10.0));
        let original = image.clone();
        let animation = fill::<Queue<Point>, _>(&mut image, 1, 1, &SolidPicker::new(RED), 0.0, 1).unwrap();

        assert_eq!(animation.len(), 2);
        assert_eq!(animation.frame(0), animation.frame(1));
        assert_eq!(image.pixel(1, 1), Some(&RED));
        for ((y, x), pixel) in image.pixels().indexed_iter() {
            if (x, y) != (1, 1) {
                assert_eq!(*pixel, original.pixels()[[y, x]]);
            }
        }
    }

    #[test]
    fn test_each_pixel_picked_once() {
        let calls = Cell::new(0usize);
        let picker = |_x: usize, _y: usize| {
            calls.set(calls.get() + 1);
            RED
        };

        let mut image = Image::new(8, 6, GRAY);
        let animation = fill::<Stack<Point>, _>(&mut image, 3, 3, &picker, 0.5, 1).unwrap();

        assert_eq!(calls.get(), 48);
        // seed frame + 47 fills + final
        assert_eq!(animation.len(), 49);
        assert_eq!(fill_sequence(&animation).len(), 47);
    }

    #[test]
    fn test_region_stops_at_walls() {
        // A black column splits the image in two
        let wall = HslaPixel::hsl(0.0, 0.0, 0.0);
        let mut image = Image::from_fn(5, 3, |x, _| if x == 2 { wall } else { GRAY });
        fill::<Queue<Point>, _>(&mut image, 0, 1, &SolidPicker::new(RED), 0.1, 10).unwrap();

        for y in 0..3 {
            assert_eq!(image.pixel(0, y), Some(&RED));
            assert_eq!(image.pixel(1, y), Some(&RED));
            assert_eq!(image.pixel(2, y), Some(&wall));
            assert_eq!(image.pixel(3, y), Some(&GRAY));
            assert_eq!(image.pixel(4, y), Some(&GRAY));
        }
    }

    #[test]
    fn test_seed_on_far_corner() {
        let mut image = Image::new(4, 3, GRAY);
        let animation = fill::<Stack<Point>, _>(&mut image, 3, 2, &SolidPicker::new(RED), 0.5, 4).unwrap();
        assert_eq!(count_color(&image, RED), 12);
        assert_eq!(animation.len(), 2 + 11 / 4);
    }

    #[test]
    fn test_single_pixel_image() {
        let mut image = Image::new(1, 1, GRAY);
        let animation = fill::<Queue<Point>, _>(&mut image, 0, 0, &SolidPicker::new(RED), 1.0, 1).unwrap();
        assert_eq!(animation.len(), 2);
        assert_eq!(image.pixel(0, 0), Some(&RED));
    }

    #[test]
    fn test_seed_out_of_bounds() {
        let mut image = Image::new(3, 3, GRAY);
        let result = fill::<Stack<Point>, _>(&mut image, 3, 0, &SolidPicker::new(RED), 0.5, 1);
        assert!(matches!(
            result,
            Err(FillError::SeedOutOfBounds { x: 3, y: 0, width: 3, height: 3 })
        ));
        assert_eq!(count_color(&image, GRAY), 9);
    }

    #[test]
    fn test_engine_rejects_seed_outside_image() {
        let mut image = Image::new(2, 4, GRAY);
        let picker = SolidPicker::new(RED);
        let engine = FillEngine::<Queue<Point>, _>::new(&mut image, Point::new(1, 4), &picker, 0.5, 1);
        assert!(matches!(
            engine,
            Err(FillError::SeedOutOfBounds { x: 1, y: 4, width: 2, height: 4 })
        ));
    }

    #[test]
    fn test_full_tolerance_fills_opposite_colors() {
        // Opposite hue, full saturation, opposite lightness: the farthest
        // pair of colors there is.
        let black_red = HslaPixel::hsl(0.0, 1.0, 0.0);
        let white_cyan = HslaPixel::hsl(180.0, 1.0, 1.0);
        let mut image = Image::from_fn(2, 1, |x, _| if x == 0 { black_red } else { white_cyan });
        let animation = fill::<Stack<Point>, _>(&mut image, 0, 0, &SolidPicker::new(GREEN), 1.0, 1).unwrap();

        assert_eq!(image.pixel(1, 0), Some(&GREEN));
        assert_eq!(animation.len(), 3);
    }

    #[test]
    fn test_zero_frame_interval() {
        let mut image = Image::new(3, 3, GRAY);
        let result = fill::<Queue<Point>, _>(&mut image, 1, 1, &SolidPicker::new(RED), 0.5, 0);
        assert!(matches!(result, Err(FillError::InvalidFrameInterval)));
        assert_eq!(count_color(&image, GRAY), 9);
    }
}
