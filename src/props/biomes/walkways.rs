// src/props/biomes/walkways.rs
//! Screens built around a walkable surface: dirt paths and river bridges.

use super::{stride, BiomeCtx};
use crate::props::core::{Biome, Bounds, Edge, Point, PropType};
use crate::props::placement::{EdgeJitter, EdgeRow, SpacedFill};

const PATH_HALF_WIDTH: f32 = 22.0;
const PATH_STEP: f32 = 40.0;
/// Distance from the path center to the fence/tree lines.
const VERGE: f32 = 55.0;

fn lay_strip(ctx: &mut BiomeCtx<'_>, along_x: bool, from: f32, to: f32, center: f32) {
    for t in stride(from, to, PATH_STEP) {
        for off in [-PATH_HALF_WIDTH, 0.0, PATH_HALF_WIDTH] {
            let p = if along_x { Point::new(t, center + off) } else { Point::new(center + off, t) };
            ctx.add(PropType::Paths, p);
        }
    }
}

/// Three-wide north-south path, lined with trees, flowers and broken fencing.
pub(super) fn path(ctx: &mut BiomeCtx<'_>) {
    let a = ctx.area;
    let c = a.center();

    lay_strip(ctx, false, a.top - 20.0, a.bottom + 20.0, c.x);

    let crossing = [Edge::Left, Edge::Right]
        .into_iter()
        .any(|e| ctx.neighbor(e).is_some_and(Biome::is_walkway));
    if crossing {
        lay_strip(ctx, true, a.left - 20.0, a.right + 20.0, c.y);
    }

    let links = Edge::ALL
        .into_iter()
        .filter(|&e| ctx.neighbor(e).is_some_and(Biome::is_walkway))
        .count();
    if links >= 2 {
        let post = if crossing { c + Point::new(50.0, -50.0) } else { c + Point::new(50.0, 0.0) };
        ctx.add(PropType::Signposts, post);
    }

    let west = Bounds::new(a.left + 10.0, a.top + 15.0, c.x - VERGE, a.bottom - 15.0);
    let east = Bounds::new(c.x + VERGE, a.top + 15.0, a.right - 10.0, a.bottom - 15.0);
    for side in [west, east] {
        let n = ctx.roll(4, 5);
        ctx.scatter(PropType::Trees, side, n);
    }

    for offset in [-40.0, -30.0, 30.0, 40.0] {
        for _ in 0..3 {
            let y = ctx.between(a.top + 10.0, a.bottom - 10.0);
            let x = c.x + offset + ctx.jitter(5.0);
            if a.left < x && x < a.right {
                ctx.add(PropType::Flowers, Point::new(x, y));
            }
        }
    }

    let count = ctx.roll(4, 6);
    let fill = SpacedFill::new(count, ctx.props.spacing(PropType::Bushes)).attempts(ctx.attempts.spaced);
    let bushes: Vec<_> = ctx
        .sample(PropType::Bushes, a.inset(10.0), &fill)
        .into_iter()
        .filter(|p| (p.x - c.x).abs() > PATH_HALF_WIDTH + 15.0)
        .collect();
    ctx.extend(PropType::Bushes, bushes);

    // Fence posts on both verges, roughly every 48px, with gaps.
    let lane = Bounds::new(c.x - VERGE, a.top + 30.0, c.x + VERGE, a.bottom - 20.0);
    let posts = (lane.height() / 48.0).ceil().max(0.0) as usize;
    let jitter = EdgeJitter { along: 4.0, inset_min: 0.0, inset_max: 0.0 };
    for edge in [Edge::Left, Edge::Right] {
        let row = ctx.sample(PropType::Fences, lane, &EdgeRow { edge, count: posts, jitter });
        let kept: Vec<_> = row.into_iter().filter(|_| ctx.chance(0.7)).collect();
        ctx.extend(PropType::Fences, kept);
    }
}

/// Plank bridge over a river that fills the rest of the screen.
pub(super) fn bridge(ctx: &mut BiomeCtx<'_>) {
    let a = ctx.area;
    let c = a.center();

    for (from, to) in [(a.left - 10.0, c.x - 30.0), (c.x + 30.0, a.right + 20.0)] {
        for x in stride(from, to, 52.0) {
            for y in stride(a.top - 10.0, a.bottom + 20.0, 52.0) {
                ctx.add(PropType::Water, Point::new(x, y));
            }
        }
    }

    for y in stride(a.top - 10.0, a.bottom + 10.0, 38.0) {
        ctx.add(PropType::Bridges, Point::new(c.x - 15.0, y));
        ctx.add(PropType::Bridges, Point::new(c.x + 15.0, y));
    }

    ctx.add(PropType::Paths, Point::new(c.x, a.top - 20.0));
    ctx.add(PropType::Paths, Point::new(c.x, a.bottom + 20.0));

    let corners = [
        Point::new(a.left + 25.0, a.top + 25.0),
        Point::new(a.left + 25.0, a.bottom - 25.0),
        Point::new(a.right - 25.0, a.top + 25.0),
        Point::new(a.right - 25.0, a.bottom - 25.0),
    ];
    for corner in corners {
        if ctx.props.exclusion().contains(corner) {
            continue;
        }
        let near = corner + Point::new(ctx.jitter(8.0), ctx.jitter(8.0));
        ctx.add(PropType::Flowers, near);
        let wide = corner + Point::new(ctx.jitter(12.0), ctx.jitter(12.0));
        ctx.add(PropType::Flowers, wide);
        if ctx.chance(0.5) {
            ctx.add(PropType::Bushes, corner);
        }
    }
}
