// src/props/biomes/meadow.rs
use super::BiomeCtx;
use crate::props::core::PropType;

/// Open grass: a few flower patches, scattered trees and bushes, the odd rock.
pub(super) fn generate(ctx: &mut BiomeCtx<'_>) {
    let a = ctx.area;

    let patches = ctx.roll(3, 5);
    for center in ctx.anchors(a, patches, 60.0) {
        let size = ctx.roll(8, 12);
        ctx.cluster(PropType::Flowers, a, center, size, 25.0);
    }

    let trees = ctx.roll(6, 8);
    ctx.scatter(PropType::Trees, a.inset(20.0), trees);
    let bushes = ctx.roll(5, 7);
    ctx.scatter(PropType::Bushes, a.inset(15.0), bushes);
    let rocks = ctx.roll(1, 2);
    ctx.scatter(PropType::Rocks, a.inset(25.0), rocks);
}
