// src/props/biomes/home.rs
use super::{stride, BiomeCtx};
use crate::props::core::{Point, PropType};

const FENCE_STEP: f32 = 40.0;
const GATE_HALF_WIDTH: f32 = 35.0;

/// Offsets from the screen center, mirrored left/right.
const TREE_SPOTS: [(f32, f32); 4] = [(160.0, -60.0), (170.0, 60.0), (100.0, -90.0), (130.0, 80.0)];
const HEDGE_SPOTS: [(f32, f32); 4] = [(60.0, 65.0), (80.0, 80.0), (40.0, 90.0), (100.0, 40.0)];
const GARDENS: [(f32, f32); 3] = [(-100.0, 50.0), (100.0, 50.0), (0.0, 90.0)];

/// Fenced yard around the player's house: gardens, hedges, trees, and a path to the door.
/// The house footprint itself is the layout's exclusion zone.
pub(super) fn generate(ctx: &mut BiomeCtx<'_>) {
    let a = ctx.area;
    let c = a.center();
    let fence = a.inset(15.0);

    for x in stride(fence.left, fence.right + 1.0, FENCE_STEP) {
        ctx.add(PropType::Fences, Point::new(x, fence.top));
        if (x - c.x).abs() > GATE_HALF_WIDTH {
            ctx.add(PropType::Fences, Point::new(x, fence.bottom));
        }
    }
    for y in stride(fence.top + FENCE_STEP, fence.bottom, FENCE_STEP) {
        ctx.add(PropType::Fences, Point::new(fence.left, y));
        ctx.add(PropType::Fences, Point::new(fence.right, y));
    }

    let beds = a.inset(25.0);
    for (dx, dy) in GARDENS {
        let size = ctx.roll(6, 8);
        ctx.cluster(PropType::Flowers, beds, c + Point::new(dx, dy), size, 20.0);
    }

    let yard = a.inset(10.0);
    for (dx, dy) in TREE_SPOTS {
        for side in [-1.0, 1.0] {
            let p = c + Point::new(side * dx, dy);
            if yard.contains(p) {
                ctx.add(PropType::Trees, p);
            }
        }
    }
    for (dx, dy) in HEDGE_SPOTS {
        for side in [-1.0, 1.0] {
            ctx.add(PropType::Bushes, c + Point::new(side * dx, dy));
        }
    }

    for y in stride(c.y + 80.0, a.bottom + 20.0, FENCE_STEP) {
        for dx in [-15.0, 0.0, 15.0] {
            ctx.add(PropType::Paths, Point::new(c.x + dx, y));
        }
    }
}
