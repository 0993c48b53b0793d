/// Level layout to render manifest converter main entry point
use clap::{Parser, Subcommand, ValueEnum};
use level_cloud::batch::LayerKind;
use level_cloud::config::ColourMode;
use level_cloud::coordinates::Scale;
use level_cloud::settings::MANIFEST_FILE_NAME;
use level_cloud::{LevelConverter, VisualizationConfig, inspect_file};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "level-cloud", about = "Level layout CSV to render manifest converter")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load geometry, chests, spawns and doors
    Visualize {
        #[command(flatten)]
        common: CommonArgs,
        /// Paint geometry in a solid colour instead of by height
        #[arg(long)]
        no_height_colour: bool,
        /// Link consecutive geometry points that are close together
        #[arg(long)]
        connect: bool,
    },
    /// Load the multi-zone geometry set, one colour per zone
    Zones {
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Report accepted and dropped lines of one file
    Inspect {
        file: PathBuf,
        #[arg(long, value_enum)]
        layer: LayerArg,
        #[arg(long)]
        scale: Option<f64>,
    },
}

#[derive(clap::Args)]
struct CommonArgs {
    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Directory data files are resolved against
    #[arg(long)]
    data_dir: Option<PathBuf>,
    #[arg(long)]
    scale: Option<f64>,
    /// Manifest path (default: <data-dir>/level_manifest.json)
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum LayerArg {
    Geometry,
    Chest,
    Spawn,
    Door,
}

impl From<LayerArg> for LayerKind {
    fn from(arg: LayerArg) -> Self {
        match arg {
            LayerArg::Geometry => LayerKind::Geometry,
            LayerArg::Chest => LayerKind::Chests,
            LayerArg::Spawn => LayerKind::Spawns,
            LayerArg::Door => LayerKind::Doors,
        }
    }
}

impl CommonArgs {
    fn resolve(&self) -> Result<(VisualizationConfig, PathBuf), Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => VisualizationConfig::load(path)?,
            None => VisualizationConfig::default(),
        };
        if let Some(dir) = &self.data_dir {
            config.data_dir = dir.clone();
        }
        if let Some(scale) = self.scale {
            config.coordinate_scale = scale;
        }
        config.validate()?;

        let output = self
            .output
            .clone()
            .unwrap_or_else(|| config.data_dir.join(MANIFEST_FILE_NAME));
        Ok((config, output))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match Cli::parse().command {
        Command::Visualize {
            common,
            no_height_colour,
            connect,
        } => {
            let (mut config, output) = common.resolve()?;
            if no_height_colour {
                config.geometry.colour_mode = ColourMode::Solid {
                    colour: VisualizationConfig::solid_geometry_colour(),
                };
            }
            config.geometry.connect_neighbours |= connect;
            LevelConverter::new(config, &output).convert()?;
        }
        Command::Zones { common } => {
            let (config, output) = common.resolve()?;
            LevelConverter::new(config, &output).convert_zones()?;
        }
        Command::Inspect { file, layer, scale } => {
            let scale = match scale {
                Some(s) => Scale::new(s)?,
                None => Scale::default(),
            };
            inspect(&file, layer.into(), scale)?;
        }
    }

    Ok(())
}

fn inspect(file: &Path, kind: LayerKind, scale: Scale) -> Result<(), Box<dyn std::error::Error>> {
    let report = inspect_file(file, kind, scale)?;

    println!("{} as {} layer:", file.display(), report.kind);
    println!("  Lines read: {}", report.lines_consumed);
    println!("  Accepted: {}", report.accepted);
    println!("  Skipped: {}", report.skipped.len());
    for skipped in &report.skipped {
        println!("    line {}: {}", skipped.line, skipped.reason);
    }

    Ok(())
}
