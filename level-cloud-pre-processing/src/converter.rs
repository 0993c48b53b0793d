/// Level layout converter orchestrating layer loading and manifest output.
use crate::batch::LayerKind;
use crate::config::VisualizationConfig;
use crate::coordinates::{Point3, Scale};
use crate::error::LoadError;
use crate::layers::{
    ChestRecord, DoorRecord, SpawnRecord, chest_layout, door_layout, geometry_layout, spawn_layout,
};
use crate::manifest::ManifestGenerator;
use crate::reader::read_lines;
use crate::record::{
    FieldLayout, LayerRecord, ParseReport, SkippedRecord, parse_records_with_progress,
};
use crate::session::LevelSession;
use crate::settings::{PROGRESS_CHARS, PROGRESS_MIN_LINES, PROGRESS_TEMPLATE};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use std::path::{Path, PathBuf};

/// Read and parse one layer file.
/// Only a missing or unreadable file is an error; bad lines are reported in the result.
pub fn load_layer<T: LayerRecord>(
    file_path: &Path,
    layout: &FieldLayout,
    scale: Scale,
    name: &str,
) -> Result<ParseReport<T>, LoadError> {
    let lines = read_lines(file_path)?;
    let data_lines = lines.len().saturating_sub(1);
    let expected = layout.max_records.map_or(data_lines, |cap| cap.min(data_lines));

    let pb = create_progress_bar(expected);
    pb.set_message(format!("Parsing {}", name));
    let report = parse_records_with_progress(&lines, layout, scale, &pb);
    pb.finish_with_message(format!("{} parsed", name));

    info!(
        "{}: loaded {} records from {} ({} skipped)",
        name,
        report.records.len(),
        file_path.display(),
        report.skipped.len()
    );
    Ok(report)
}

/// Progress bar for large files; small files get a hidden bar.
fn create_progress_bar(len: usize) -> ProgressBar {
    if len < PROGRESS_MIN_LINES {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len as u64);
    let style = ProgressStyle::default_bar()
        .template(PROGRESS_TEMPLATE)
        .map(|s| s.progress_chars(PROGRESS_CHARS))
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    pb.set_style(style);
    pb
}

/// Outcome of checking a single file against one layer's format
#[derive(Debug, Clone, PartialEq)]
pub struct InspectionReport {
    pub kind: LayerKind,
    pub lines_consumed: usize,
    pub accepted: usize,
    pub skipped: Vec<SkippedRecord>,
}

impl InspectionReport {
    fn from_report<T>(kind: LayerKind, report: ParseReport<T>) -> Self {
        Self {
            kind,
            lines_consumed: report.lines_consumed,
            accepted: report.records.len(),
            skipped: report.skipped,
        }
    }
}

/// Drives a full load and writes the render manifest.
pub struct LevelConverter {
    config: VisualizationConfig,
    /// Manifest destination.
    output_path: PathBuf,
}

impl LevelConverter {
    pub fn new(config: VisualizationConfig, output_path: &Path) -> Self {
        Self {
            config,
            output_path: output_path.to_path_buf(),
        }
    }

    /// Load geometry, chests, spawns and doors, then write the manifest.
    pub fn convert(&self) -> Result<LevelSession, Box<dyn std::error::Error>> {
        println!(
            "Converting level layout from {} (scale {})...",
            self.config.data_dir.display(),
            self.config.coordinate_scale
        );

        let session = LevelSession::load(&self.config)?;
        self.write_manifest(&session)?;

        println!("Conversion complete!");
        Ok(session)
    }

    /// Load the multi-zone geometry set, then write the manifest.
    pub fn convert_zones(&self) -> Result<LevelSession, Box<dyn std::error::Error>> {
        println!(
            "Loading {} zone files from {}...",
            self.config.zones.iter().filter(|z| z.enabled).count(),
            self.config.data_dir.display()
        );

        let session = LevelSession::load_zones(&self.config)?;
        self.write_manifest(&session)?;

        println!("Zone loading complete!");
        Ok(session)
    }

    fn write_manifest(&self, session: &LevelSession) -> Result<(), Box<dyn std::error::Error>> {
        let manifest_gen = ManifestGenerator::new(&self.output_path);
        manifest_gen.generate_manifest(session)?;
        Ok(())
    }
}

/// Parse `file_path` with the layout of `kind` and report what was kept and dropped.
pub fn inspect_file(
    file_path: &Path,
    kind: LayerKind,
    scale: Scale,
) -> Result<InspectionReport, LoadError> {
    let name = kind.to_string();
    let report = match kind {
        LayerKind::Geometry | LayerKind::Zone(_) => InspectionReport::from_report(
            kind,
            load_layer::<Point3>(file_path, &geometry_layout(None), scale, &name)?,
        ),
        LayerKind::Chests => InspectionReport::from_report(
            kind,
            load_layer::<ChestRecord>(file_path, &chest_layout(None), scale, &name)?,
        ),
        LayerKind::Spawns => InspectionReport::from_report(
            kind,
            load_layer::<SpawnRecord>(file_path, &spawn_layout(None), scale, &name)?,
        ),
        LayerKind::Doors => InspectionReport::from_report(
            kind,
            load_layer::<DoorRecord>(file_path, &door_layout(None), scale, &name)?,
        ),
    };
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::SkipReason;
    use crate::test_support::{temp_dir_with, write_temp_csv};

    #[test]
    fn test_load_layer_reports_skips() {
        let path = write_temp_csv(
            "converter_geometry",
            "id,x,y,z\n1,100,200,300\n2,abc,0,0\n3,0,0,0\n",
        );
        let report: ParseReport<Point3> =
            load_layer(&path, &geometry_layout(Some(500)), Scale::default(), "Geometry").unwrap();
        assert_eq!(report.records.len(), 2);
        assert_eq!(report.skipped.len(), 1);
    }

    #[test]
    fn test_load_layer_missing_file() {
        let missing = std::env::temp_dir().join("level_cloud_missing_layer.csv");
        let result: Result<ParseReport<Point3>, _> =
            load_layer(&missing, &geometry_layout(None), Scale::default(), "Geometry");
        assert!(matches!(result, Err(LoadError::FileNotFound { .. })));
    }

    #[test]
    fn test_inspect_as_chest_layer() {
        let path = write_temp_csv(
            "converter_inspect",
            "id,x,y,z\n1,100,200,300\n2,abc,0,0\n3,0,0,0\n",
        );
        let report = inspect_file(&path, LayerKind::Chests, Scale::default()).unwrap();
        assert_eq!(report.accepted, 0);
        assert_eq!(report.lines_consumed, 3);
        assert!(report
            .skipped
            .iter()
            .all(|s| matches!(s.reason, SkipReason::TooFewFields { required: 8, .. })));
    }

    #[test]
    fn test_convert_writes_manifest() {
        let dir = temp_dir_with(
            "converter_manifest",
            &[("coordinates_zone_5mb.csv", "id,x,y,z\n1,100,200,300\n")],
        );
        let config = VisualizationConfig {
            data_dir: dir.clone(),
            ..VisualizationConfig::default()
        };
        let output = dir.join("out.json");
        let converter = LevelConverter::new(config, &output);

        let session = converter.convert().unwrap();
        assert_eq!(session.layer(LayerKind::Geometry).unwrap().record_count(), 1);

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(written["layers"].as_array().unwrap().len(), 4);
    }
}
