use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;

/// Fixed offsets used by the orthogonal router, in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// How far a loop-back edge swings right of its source before climbing.
    pub loop_offset: f64,
    /// Height above the target at which a loop-back edge turns left.
    pub loop_clearance: f64,
    /// Length of the first leg out of a branching handle.
    pub branch_offset: f64,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            loop_offset: 50.0,
            loop_clearance: 20.0,
            branch_offset: 20.0,
        }
    }
}

/// Geometry used when a new shape is dropped onto the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropConfig {
    /// Maximum distance between the drop point and an edge for the new node
    /// to be spliced into that edge.
    pub edge_snap_distance: f64,
    /// Assumed node width when the host has not measured a node.
    pub node_width: f64,
    /// Assumed node height when the host has not measured a node.
    pub node_height: f64,
}

impl Default for DropConfig {
    fn default() -> Self {
        Self {
            edge_snap_distance: 50.0,
            node_width: 100.0,
            node_height: 40.0,
        }
    }
}

/// Tuning values for the editor.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub routing: RoutingConfig,
    pub drop: DropConfig,
}

impl EditorConfig {
    /// Loads a config from a JSON file. Missing fields fall back to defaults.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
