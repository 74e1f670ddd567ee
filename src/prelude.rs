//! Prelude module for convenient imports
//!
//! Re-exports the types most hosts need: the editor and its builder, the
//! graph model, routing entry points, presets, and the error types.
//!
//! ```rust
//! use progressflow::prelude::*;
//!
//! let mut editor = Editor::new();
//! editor.load(Preset::AgeCheck);
//! assert_eq!(editor.snapshot().nodes().len(), 6);
//! ```

// Editing and history
pub use crate::editor::{
    CommandOutcome, DeletionReport, EditCommand, Editor, EditorBuilder, IdSource, RandomIds,
    SequentialIds,
};
pub use crate::history::History;

// Graph model
pub use crate::graph::{Direction, Edge, Graph, Handle, Node, NodeKind, Position, ProposedEdge};

// Rules and drawing
pub use crate::connection::validate;
pub use crate::routing::{
    EdgeAnchors, HandlePosition, Polyline, RouteRequest, default_anchors, is_loop, route,
    route_all, route_edge,
};

// Presets, config and wire shape
pub use crate::config::{DropConfig, EditorConfig, RoutingConfig};
pub use crate::preset::Preset;
pub use crate::ui::UiSnapshot;

// Error types
pub use crate::error::{ConfigError, ConnectionRejected, EditError, ParseError};
