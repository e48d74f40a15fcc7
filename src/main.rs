use std::path::PathBuf;

use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;
use clap::Parser;

use overworld_props::props::export::{write_ron, ExportError};
use overworld_props::props::{
    LayoutError, OverworldLayout, OverworldPlacements, OverworldPropsPlugin, OverworldSettings,
};

/// Populate an overworld layout with props and write the placements as RON.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Layout file (.layout.ron). The built-in 6x4 overworld is used when omitted.
    #[arg(short, long, value_name = "FILE")]
    layout: Option<PathBuf>,
    /// World seed; the same seed and layout always give the same placements.
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// Where to write the placements.
    #[arg(short, long, value_name = "FILE", default_value = "overworld_props.ron")]
    out: PathBuf,
    /// Log per-screen and per-type counts.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error(transparent)]
    Export(#[from] ExportError),
}

fn main() -> Result<(), CliError> {
    let args = CliArgs::parse();

    let layout = match &args.layout {
        Some(path) => OverworldLayout::load(path)?,
        None => OverworldLayout::default(),
    };

    let log = LogPlugin {
        level: if args.verbose { Level::DEBUG } else { Level::INFO },
        ..Default::default()
    };

    let mut app = App::new();
    app.insert_resource(OverworldSettings { layout, world_seed: args.seed })
        .add_plugins((log, OverworldPropsPlugin));
    // one frame: Startup generates, Update logs the summary
    app.update();

    let placements = app.world().resource::<OverworldPlacements>();
    write_ron(&args.out, &placements.0)?;
    info!("Wrote {} props to {}", placements.0.total(), args.out.display());
    Ok(())
}
