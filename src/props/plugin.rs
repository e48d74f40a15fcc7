//! Props plugin wiring (glue).
//! - OverworldSettings (layout + world seed)
//! - Startup generation into the OverworldPlacements resource
//! - OverworldPropsGenerated event + per-type summary log

use bevy::prelude::*;

use super::core::PlacementSet;
use super::generator::generate_overworld;
use super::layout::OverworldLayout;

/// Which layout to populate and with which seed.
#[derive(Resource, Clone, Debug)]
pub struct OverworldSettings {
    pub layout: OverworldLayout,
    pub world_seed: u64,
}
impl Default for OverworldSettings {
    fn default() -> Self {
        Self {
            layout: OverworldLayout::default(),
            world_seed: 42,
        }
    }
}

/// Output of the last generation run; empty until Startup has run.
#[derive(Resource, Clone, Debug, Default, PartialEq)]
pub struct OverworldPlacements(pub PlacementSet);

/// Fired once the placements resource holds a fresh run.
#[derive(Event, Clone, Copy, Debug)]
pub struct OverworldPropsGenerated {
    pub seed: u64,
    pub total: usize,
}

pub struct OverworldPropsPlugin;
impl Plugin for OverworldPropsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OverworldSettings>()
            .init_resource::<OverworldPlacements>()
            .add_event::<OverworldPropsGenerated>()
            .add_systems(Startup, generate_placements)
            .add_systems(Update, log_generated);
    }
}

/// Startup: run the generator over the configured layout.
fn generate_placements(
    settings: Res<OverworldSettings>,
    mut placements: ResMut<OverworldPlacements>,
    mut generated: EventWriter<OverworldPropsGenerated>,
) {
    if let Err(e) = settings.layout.validate() {
        warn!("Props: layout failed validation, nothing generated: {e}");
        return;
    }
    let set = generate_overworld(&settings.layout, settings.world_seed);
    let total = set.total();
    placements.0 = set;
    generated.write(OverworldPropsGenerated { seed: settings.world_seed, total });
}

fn log_generated(
    mut evr: EventReader<OverworldPropsGenerated>,
    placements: Res<OverworldPlacements>,
) {
    for ev in evr.read() {
        info!("Props: generated {} props (seed {})", ev.total, ev.seed);
        for (kind, n) in placements.0.counts() {
            debug!("  {:>10}: {}", kind.name(), n);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startup_fills_placements_and_fires_event() {
        let mut app = App::new();
        app.add_plugins(OverworldPropsPlugin);
        app.update();

        let placements = app.world().resource::<OverworldPlacements>();
        assert!(placements.0.total() > 0);
        let expected = generate_overworld(&OverworldLayout::default(), 42);
        assert_eq!(placements.0, expected);

        let events = app.world().resource::<Events<OverworldPropsGenerated>>();
        let mut cursor = events.get_cursor();
        let fired: Vec<_> = cursor.read(events).collect();
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].total, expected.total());
    }

    #[test]
    fn invalid_layout_generates_nothing() {
        let mut layout = OverworldLayout::default();
        layout.biomes[1].push(crate::props::core::Biome::Forest);
        let mut app = App::new();
        app.insert_resource(OverworldSettings { layout, world_seed: 1 });
        app.add_plugins(OverworldPropsPlugin);
        app.update();

        assert!(app.world().resource::<OverworldPlacements>().0.is_empty());
        let events = app.world().resource::<Events<OverworldPropsGenerated>>();
        assert!(events.is_empty());
    }

    #[test]
    fn inserted_settings_win_over_defaults() {
        let mut app = App::new();
        app.insert_resource(OverworldSettings { world_seed: 7, ..Default::default() });
        app.add_plugins(OverworldPropsPlugin);
        app.update();

        let placements = app.world().resource::<OverworldPlacements>();
        assert_eq!(placements.0, generate_overworld(&OverworldLayout::default(), 7));
    }
}
