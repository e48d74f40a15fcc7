// src/props/biomes/highlands.rs
//! Wall-dominated screens: a mountain range running north-south, or a cliff face east-west.

use super::BiomeCtx;
use crate::props::core::{Bounds, PropType};
use crate::props::placement::{Wall, WallOrientation};

/// Deep vertical wall over the western 65% with hardy scrub along its base.
pub(super) fn mountain(ctx: &mut BiomeCtx<'_>) {
    let a = ctx.area;
    let wall_end = a.left + a.width() * 0.65;

    let layers = ctx.roll(4, 5) as u32;
    let face = Bounds::new(a.left - 10.0, a.top - 10.0, wall_end, a.bottom + 10.0);
    ctx.apply(PropType::Mountains, face, &Wall::new(WallOrientation::Vertical, 50.0, layers));

    let base = Bounds::new(wall_end + 5.0, a.top + 15.0, a.right - 10.0, a.bottom - 15.0);
    let rocks = ctx.roll(5, 7);
    ctx.scatter(PropType::Rocks, base, rocks);
    let bushes = ctx.roll(3, 4);
    ctx.scatter(PropType::Bushes, base, bushes);
    let flowers = ctx.roll(2, 4);
    ctx.scatter(PropType::Flowers, base, flowers);
}

/// Three-layer horizontal cliff across the upper half, vegetation below the face.
pub(super) fn cliffs(ctx: &mut BiomeCtx<'_>) {
    let a = ctx.area;
    let cliff_bottom = a.top + a.height() * 0.5;

    let face = Bounds::new(a.left - 10.0, a.top - 10.0, a.right + 10.0, cliff_bottom);
    ctx.apply(PropType::Cliffs, face, &Wall::new(WallOrientation::Horizontal, 55.0, 3));

    let base = Bounds::new(a.left + 10.0, cliff_bottom + 5.0, a.right - 10.0, a.bottom - 10.0);
    let rocks = ctx.roll(5, 7);
    ctx.scatter(PropType::Rocks, base, rocks);
    let trees = ctx.roll(4, 6);
    ctx.scatter(PropType::Trees, base, trees);
    let bushes = ctx.roll(3, 5);
    ctx.scatter(PropType::Bushes, base, bushes);
    let flowers = ctx.roll(4, 6);
    ctx.scatter(PropType::Flowers, base, flowers);
}

#[cfg(test)]
mod tests {
    use super::super::test_support::run_single;
    use crate::props::core::{Biome, PropType};

    #[test]
    fn mountain_wall_is_dense_and_west_of_the_base() {
        let (_, set) = run_single(Biome::Mountain, 426.0, 240.0, 20.0, 4);
        let wall = set.points(PropType::Mountains);
        // 4-5 layers of 6 tiles each on a 240px screen
        assert!(wall.len() >= 4 * 6, "{} wall tiles", wall.len());
        let wall_end = 20.0 + 386.0 * 0.65;
        assert!(set.points(PropType::Rocks).iter().all(|p| p.x > wall_end));
    }

    #[test]
    fn cliff_face_sits_in_the_upper_half() {
        let (_, set) = run_single(Biome::Cliffs, 426.0, 240.0, 20.0, 4);
        let face = set.points(PropType::Cliffs);
        assert!(!face.is_empty());
        // three layers, 41.25px apart, from y = 10, plus 3px jitter
        assert!(face.iter().all(|p| p.y <= 10.0 + 2.0 * 41.25 + 3.0 + 1e-3));
        let mid = 20.0 + 100.0;
        assert!(set.points(PropType::Trees).iter().all(|p| p.y > mid));
    }
}
