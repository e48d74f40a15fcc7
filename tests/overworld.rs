use overworld_props::props::core::{Biome, Bounds, CellCoord, PlacementSet, PropType};
use overworld_props::props::layout::{OverworldLayout, SpacingTable};
use overworld_props::props::generate_overworld;

fn assert_spacing(layout: &OverworldLayout, set: &PlacementSet) {
    for kind in PropType::ALL {
        let min = layout.spacing.get(kind);
        if min <= 0.0 {
            continue;
        }
        let pts = set.points(kind);
        for (i, a) in pts.iter().enumerate() {
            for b in &pts[i + 1..] {
                assert!(a.distance(*b) >= min, "{} at {a} and {b} closer than {min}", kind.name());
            }
        }
    }
}

fn bbox(points: &[bevy::math::Vec2]) -> Bounds {
    let min = points.iter().fold(points[0], |m, p| m.min(*p));
    let max = points.iter().fold(points[0], |m, p| m.max(*p));
    Bounds::from_corners(min, max)
}

#[test]
fn default_world_honors_spacing_and_exclusion() {
    let layout = OverworldLayout::default();
    for seed in [0, 1, 42, 1234] {
        let set = generate_overworld(&layout, seed);
        assert_spacing(&layout, &set);
        let zone = layout.exclusion_zone();
        for (kind, pts) in set.iter() {
            assert!(pts.iter().all(|p| !zone.contains(*p)), "{} inside exclusion", kind.name());
        }
        let world = layout.world_bounds();
        assert!(set.iter().all(|(_, pts)| pts.iter().all(|p| world.contains(*p))));
    }
}

#[test]
fn same_seed_same_world() {
    let layout = OverworldLayout::default();
    assert_eq!(generate_overworld(&layout, 9), generate_overworld(&layout, 9));
    assert_ne!(generate_overworld(&layout, 9), generate_overworld(&layout, 10));
}

#[test]
fn exclusion_in_the_middle_of_a_forest_stays_empty() {
    let layout = OverworldLayout {
        biomes: vec![vec![Biome::Forest, Biome::Meadow], vec![Biome::Lake, Biome::Beach]],
        exclusion: Bounds::new(100.0, 60.0, 330.0, 180.0),
        ..Default::default()
    };
    let set = generate_overworld(&layout, 3);
    let zone = layout.exclusion_zone();
    assert!(set.total() > 0);
    assert!(set.iter().all(|(_, pts)| pts.iter().all(|p| !zone.contains(*p))));
    assert_spacing(&layout, &set);
}

#[test]
fn small_two_by_two_world() {
    let layout = OverworldLayout {
        screen_width: 100.0,
        screen_height: 100.0,
        margin: 0.0,
        biomes: vec![vec![Biome::Meadow, Biome::Forest], vec![Biome::Lake, Biome::Mountain]],
        exclusion: Bounds::new(1000.0, 1000.0, 1100.0, 1100.0),
        spacing: SpacingTable { trees: 40.0, flowers: 10.0, water: 0.0, ..Default::default() },
        ..Default::default()
    };
    layout.validate().unwrap();
    let set = generate_overworld(&layout, 1);

    let meadow = layout.screen_bounds(CellCoord::new(0, 0));
    let forest = layout.screen_bounds(CellCoord::new(1, 0));
    let lake = layout.screen_bounds(CellCoord::new(0, 1));
    assert_eq!(meadow, Bounds::new(0.0, 0.0, 100.0, 100.0));
    assert_eq!(lake, Bounds::new(0.0, 100.0, 100.0, 200.0));

    assert!(set.points(PropType::Flowers).iter().any(|p| meadow.contains(*p)));
    assert!(set.points(PropType::Trees).iter().any(|p| meadow.contains(*p)));
    assert!(set.points(PropType::Trees).iter().any(|p| forest.contains(*p)));

    let water = set.points(PropType::Water);
    assert!(!water.is_empty());
    let wb = bbox(water);
    assert!(lake.contains(wb.min()) && lake.contains(wb.max()), "water spans {wb:?}");

    let world = Bounds::new(0.0, 0.0, 200.0, 200.0);
    assert_eq!(layout.world_bounds(), world);
    assert!(set.iter().all(|(_, pts)| pts.iter().all(|p| world.contains(*p))));
    assert_spacing(&layout, &set);
}

#[test]
fn layout_asset_matches_builtin_default() {
    let text = include_str!("../assets/overworld.layout.ron");
    let layout = OverworldLayout::from_ron_str(text).unwrap();
    assert_eq!(layout, OverworldLayout::default());
}
