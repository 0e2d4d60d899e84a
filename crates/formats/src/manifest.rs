use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::TourDataError;

/// The tour description served as `hotspots.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TourManifest {
    pub meta: TourMeta,
    pub scenes: BTreeMap<String, SceneSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TourMeta {
    pub default_scene: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SceneSpec {
    pub image: String,
    #[serde(default)]
    pub hotspots: Vec<HotspotSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sidepanel_content: Option<SidePanelContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor_group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor_order: Option<f64>,
}

/// Marker position in percent of the scene image.
#[derive(Debug, Default, Copy, Clone, Serialize, Deserialize, PartialEq)]
pub struct HotspotPosition {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HotspotSpec {
    pub position: HotspotPosition,
    pub entries: Vec<EntrySpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EntrySpec {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub author: String,
    /// URL of the detail text (HTML fragment).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SidePanelContent {
    pub title: String,
    pub text_file: String,
}

impl EntrySpec {
    /// Heading for the detail view; falls back to the marker label.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.label)
    }
}

impl SceneSpec {
    /// Sum of entries over every hotspot of the scene.
    pub fn hotspot_entry_count(&self) -> usize {
        self.hotspots.iter().map(|h| h.entries.len()).sum()
    }
}

impl TourManifest {
    /// Parses and validates a tour description.
    pub fn from_json_str(json: &str) -> Result<Self, TourDataError> {
        let manifest: TourManifest =
            serde_json::from_str(json).map_err(|e| TourDataError::Parse(e.to_string()))?;
        manifest.validate()?;
        tracing::debug!(
            scenes = manifest.scenes.len(),
            default_scene = %manifest.meta.default_scene,
            "tour description loaded"
        );
        Ok(manifest)
    }

    pub fn validate(&self) -> Result<(), TourDataError> {
        if !self.scenes.contains_key(&self.meta.default_scene) {
            return Err(TourDataError::MissingDefaultScene(self.meta.default_scene.clone()));
        }
        for (key, scene) in &self.scenes {
            for (index, hotspot) in scene.hotspots.iter().enumerate() {
                if hotspot.entries.is_empty() {
                    return Err(TourDataError::EmptyHotspot {
                        scene: key.clone(),
                        index,
                    });
                }
                if !is_percent(hotspot.position.x) || !is_percent(hotspot.position.y) {
                    return Err(TourDataError::PositionOutOfRange {
                        scene: key.clone(),
                        index,
                    });
                }
            }
            if scene.floor_group.is_some() && scene.floor_order.is_none_or(|o| !o.is_finite()) {
                return Err(TourDataError::MissingFloorOrder(key.clone()));
            }
        }
        Ok(())
    }

    pub fn scene(&self, key: &str) -> Option<&SceneSpec> {
        self.scenes.get(key)
    }

    pub fn default_scene(&self) -> &str {
        &self.meta.default_scene
    }
}

fn is_percent(v: f64) -> bool {
    v.is_finite() && (0.0..=100.0).contains(&v)
}
