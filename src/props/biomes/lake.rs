// src/props/biomes/lake.rs
use std::f32::consts::TAU;

use super::BiomeCtx;
use crate::props::core::{Point, PropType};

/// Oval water body ringed by two bands of trees, with flowers and bushes on the shore.
pub(super) fn generate(ctx: &mut BiomeCtx<'_>) {
    let a = ctx.area;
    let c = a.center();

    let rx = a.width() * 0.26;
    let ry = (rx * 0.65).min(a.height() * 0.325);
    if !(rx > 0.0 && ry > 0.0) {
        return;
    }
    let squash = ry / rx;

    // Grid scan over the oval; the loose threshold lets corner tiles fill the rim.
    let (step_x, step_y) = (rx * 0.32, ry * 0.49);
    for dx in -3i32..=3 {
        for dy in -2i32..=2 {
            let off = Point::new(dx as f32 * step_x, dy as f32 * step_y);
            if (off.x / rx).powi(2) + (off.y / ry).powi(2) <= 1.3 {
                ctx.add(PropType::Water, c + off);
            }
        }
    }
    // Patch the gaps between grid tiles.
    for _ in 0..10 {
        let angle = ctx.between(0.0, TAU);
        let reach = Point::new(ctx.between(0.0, rx * 0.8), ctx.between(0.0, ry * 0.8));
        ctx.add(PropType::Water, c + Point::new(angle.cos(), angle.sin()) * reach);
    }

    let shore = a.inset(15.0);
    for (step_deg, wobble, near, far) in [(25, 5.0, 0.90, 1.05), (35, 8.0, 1.15, 1.35)] {
        for deg in (0..360).step_by(step_deg) {
            let angle = (deg as f32 + ctx.jitter(wobble)).to_radians();
            let dist = ctx.between(rx * near, rx * far);
            let p = c + Point::new(angle.cos() * dist, angle.sin() * dist * squash);
            if shore.contains(p) {
                ctx.add(PropType::Trees, p);
            }
        }
    }

    for _ in 0..16 {
        let angle = ctx.between(0.0, TAU);
        let dist = ctx.between(rx * 0.75, rx * 0.95);
        let p = c + Point::new(angle.cos() * dist, angle.sin() * dist * squash);
        if a.contains(p) {
            ctx.add(PropType::Flowers, p);
        }
    }

    ctx.scatter(PropType::Bushes, a, 5);
}
