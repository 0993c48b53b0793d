/// Render manifest generation for the external scene renderer.
use crate::batch::{LayerKind, Primitive, RenderItem, Segment};
use crate::bounds::PointCloudBounds;
use crate::session::{LayerState, LayerStatus, LevelSession};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Everything a renderer needs to draw one load of the level layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderManifest {
    /// Scale already applied to every position.
    pub coordinate_scale: f64,
    pub layers: Vec<LayerManifest>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerManifest {
    pub kind: LayerKind,
    pub source: PathBuf,
    pub status: LayerStatus,
    pub visible: bool,
    pub record_count: usize,
    pub skipped_count: usize,
    /// Absent when the layer has no records.
    pub bounds: Option<PointCloudBounds>,
    pub primitive: Primitive,
    pub items: Vec<RenderItem>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub segments: Vec<Segment>,
}

impl From<&LayerState> for LayerManifest {
    fn from(layer: &LayerState) -> Self {
        Self {
            kind: layer.kind,
            source: layer.source.clone(),
            status: layer.status.clone(),
            visible: layer.visible,
            record_count: layer.record_count(),
            skipped_count: layer.skipped.len(),
            bounds: (!layer.bounds.is_empty()).then(|| layer.bounds.clone()),
            primitive: layer.batch.primitive,
            items: layer.batch.items.clone(),
            segments: layer.batch.segments.clone(),
        }
    }
}

impl From<&LevelSession> for RenderManifest {
    fn from(session: &LevelSession) -> Self {
        Self {
            coordinate_scale: session.scale().factor(),
            layers: session.layers().iter().map(LayerManifest::from).collect(),
        }
    }
}

/// Writes the render manifest for a session.
pub struct ManifestGenerator {
    output_path: PathBuf,
}

impl ManifestGenerator {
    pub fn new(output_path: &Path) -> Self {
        Self {
            output_path: output_path.to_path_buf(),
        }
    }

    /// Serialise the session's layers to the output path as pretty JSON.
    pub fn generate_manifest(
        &self,
        session: &LevelSession,
    ) -> Result<RenderManifest, Box<dyn std::error::Error>> {
        let manifest = RenderManifest::from(session);

        if let Some(parent) = self.output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let manifest_json = serde_json::to_string_pretty(&manifest)?;
        fs::write(&self.output_path, manifest_json)?;

        println!("Generated render manifest: {}", self.output_path.display());
        self.print_manifest_summary(&manifest);

        Ok(manifest)
    }

    /// Prints per-layer counts for verification.
    fn print_manifest_summary(&self, manifest: &RenderManifest) {
        println!("Manifest Summary:");
        for layer in &manifest.layers {
            match &layer.status {
                LayerStatus::Loaded => {
                    println!(
                        "  {}: {} records, {} skipped",
                        layer.kind, layer.record_count, layer.skipped_count
                    );
                    if let Some(bounds) = &layer.bounds {
                        println!(
                            "    bounds: ({:.2}, {:.2}, {:.2}) to ({:.2}, {:.2}, {:.2})",
                            bounds.min_x,
                            bounds.min_y,
                            bounds.min_z,
                            bounds.max_x,
                            bounds.max_y,
                            bounds.max_z
                        );
                    }
                    if !layer.segments.is_empty() {
                        println!("    segments: {}", layer.segments.len());
                    }
                }
                LayerStatus::Missing { reason } => {
                    println!("  {}: unavailable ({})", layer.kind, reason)
                }
                LayerStatus::Disabled => println!("  {}: disabled", layer.kind),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::VisualizationConfig;
    use crate::test_support::temp_dir_with;

    #[test]
    fn test_manifest_round_trips_through_json() {
        let dir = temp_dir_with(
            "manifest_json",
            &[
                ("coordinates_zone_5mb.csv", "id,x,y,z\n1,100,200,300\n2,100,400,300\n"),
                (
                    "spawn_positions.csv",
                    "a,b,x,y,z,g,m,t,c,n\n1,0,500,0,500,2,Goblin,Normal,50,3\n",
                ),
            ],
        );
        let config = VisualizationConfig {
            data_dir: dir.clone(),
            ..VisualizationConfig::default()
        };
        let session = LevelSession::load(&config).unwrap();
        let output = dir.join("nested").join("level_manifest.json");

        let manifest = ManifestGenerator::new(&output).generate_manifest(&session).unwrap();
        let read_back: RenderManifest =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();

        assert_eq!(manifest, read_back);
        assert_eq!(read_back.layers.len(), 4);

        let spawns = read_back
            .layers
            .iter()
            .find(|l| l.kind == LayerKind::Spawns)
            .unwrap();
        assert_eq!(spawns.record_count, 1);
        assert_eq!(
            spawns.items[0].label.as_ref().unwrap().text,
            "Goblin\n50% (3)"
        );

        let chests = read_back
            .layers
            .iter()
            .find(|l| l.kind == LayerKind::Chests)
            .unwrap();
        assert!(matches!(chests.status, LayerStatus::Missing { .. }));
        assert!(chests.bounds.is_none());
    }
}
