// src/props/biomes/beach.rs
use super::{stride, BiomeCtx};
use crate::props::core::{Bounds, Edge, Point, PropType};
use crate::props::placement::{EdgeJitter, EdgeRow};

/// Sea on the left, a rocky waterline, sand, then grass with trees and flowers on the right.
pub(super) fn generate(ctx: &mut BiomeCtx<'_>) {
    let a = ctx.area;
    let water_edge = a.left + a.width() * 0.35;

    // Up to three overlapping water columns, bleeding past the margin for solid coverage.
    for column in 0..3 {
        let x = a.left - 10.0 + column as f32 * 55.0;
        if x > water_edge {
            break;
        }
        for y in stride(a.top - 20.0, a.bottom + 30.0, 55.0) {
            ctx.add(PropType::Water, Point::new(x, y));
        }
    }

    let waterline = Point::new(water_edge + 15.0, a.center().y);
    let shore = Bounds::new(a.left, a.top, water_edge + 60.0, a.bottom);
    ctx.cluster(PropType::Rocks, shore, waterline, 5, 40.0);

    let sand = Bounds::new(water_edge + 30.0, a.top, a.right, a.bottom);
    let pebbles = EdgeRow { edge: Edge::Left, count: 3, jitter: EdgeJitter::default() };
    ctx.apply(PropType::Rocks, sand, &pebbles);
    ctx.scatter(PropType::Rocks, sand, 3);

    let grass = Bounds::new(a.left + a.width() * 0.55, a.top + 15.0, a.right - 10.0, a.bottom - 15.0);
    ctx.scatter(PropType::Trees, grass, 5);
    ctx.scatter(PropType::Bushes, grass, 3);
    ctx.scatter(PropType::Flowers, grass, 6);
}
