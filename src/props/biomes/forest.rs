// src/props/biomes/forest.rs
use super::BiomeCtx;
use crate::props::core::{Bounds, Point, PropType};
use crate::props::placement::SpacedFill;

/// Clearance kept between groves and the walkable corridor.
const CORRIDOR_CLEARANCE: f32 = 10.0;

/// Dense groves either side of a walkable north-south corridor.
pub(super) fn generate(ctx: &mut BiomeCtx<'_>) {
    let a = ctx.area;
    let c = a.center();

    let half = a.width() * ctx.between(0.078, 0.104);
    let corridor = Bounds::new(c.x - half, a.top, c.x + half, a.bottom);
    let west = Bounds::new(a.left, a.top, corridor.left - CORRIDOR_CLEARANCE, a.bottom);
    let east = Bounds::new(corridor.right + CORRIDOR_CLEARANCE, a.top, a.right, a.bottom);

    let sway = a.height() * 0.15;
    let mut groves = vec![
        (Point::new(a.left + (corridor.left - a.left) * 0.5, c.y + ctx.jitter(sway)), west),
        (Point::new(corridor.right + (a.right - corridor.right) * 0.5, c.y + ctx.jitter(sway)), east),
    ];
    if ctx.roll(2, 3) == 3 {
        let reach = half + 2.0 * CORRIDOR_CLEARANCE;
        let (x, side) = if ctx.chance(0.5) { (c.x - reach, west) } else { (c.x + reach, east) };
        let y = if ctx.chance(0.5) { a.top + a.height() * 0.2 } else { a.bottom - a.height() * 0.2 };
        groves.push((Point::new(x, y), side));
    }
    for (center, side) in groves {
        let size = ctx.roll(6, 8);
        ctx.cluster(PropType::Trees, side, center, size, 35.0);
    }

    let count = ctx.roll(10, 14);
    let fill = SpacedFill::new(count, ctx.props.spacing(PropType::Bushes)).attempts(ctx.attempts.spaced);
    let bushes: Vec<_> = ctx
        .sample(PropType::Bushes, a, &fill)
        .into_iter()
        .filter(|p| !(corridor.left < p.x && p.x < corridor.right))
        .collect();
    ctx.extend(PropType::Bushes, bushes);

    let rocks = ctx.roll(4, 6);
    ctx.scatter(PropType::Rocks, a, rocks);

    let flowers = ctx.roll(4, 6);
    ctx.scatter(PropType::Flowers, corridor.inset_xy(0.0, 10.0), flowers);
}

#[cfg(test)]
mod tests {
    use super::super::test_support::run_single;
    use crate::props::core::{Biome, PropType};

    #[test]
    fn corridor_stays_clear_of_trees_and_bushes() {
        // area is 386px wide centered on x = 213; the corridor half-width is at least 7.8%
        let cx = 213.0;
        let min_half = 386.0 * 0.078;
        for seed in 0..8 {
            let (_, set) = run_single(Biome::Forest, 426.0, 240.0, 20.0, seed);
            assert!(set.len(PropType::Trees) > 0, "seed {seed}");
            for p in set.points(PropType::Trees) {
                assert!((p.x - cx).abs() >= min_half + 10.0 - 1e-3, "seed {seed}: tree at {p:?}");
            }
            for p in set.points(PropType::Bushes) {
                assert!((p.x - cx).abs() >= min_half - 1e-3, "seed {seed}: bush at {p:?}");
            }
        }
    }
}
