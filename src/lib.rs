//! # progressflow - Flowchart Editing Core
//!
//! **progressflow** holds the editing logic of a drag-and-drop flowchart tool
//! used to teach sequence, selection and iteration. It is independent of any
//! UI framework: a rendering surface forwards user intent to the [`Editor`],
//! re-renders from the snapshot it returns, and asks the router how to draw
//! each edge.
//!
//! ## Core Workflow
//!
//! 1.  **Create an editor**: `Editor::new()`, or `Editor::builder()` to pick the
//!     id source and routing/drop tuning.
//! 2.  **Forward user intent**: drop shapes, propose connections, delete,
//!     undo/redo, or load one of the built-in presets. Each successful call is
//!     one undo step; rejected calls change nothing.
//! 3.  **Render**: read `editor.snapshot()` (or convert it to the
//!     [`ui::UiSnapshot`] JSON shape) and route every edge with
//!     [`routing::route_edge`].
//!
//! ## Quick Start
//!
//! ```rust
//! use progressflow::prelude::*;
//!
//! let mut editor = Editor::builder().with_ids(SequentialIds::new()).build();
//!
//! let start = editor.drop_new_node(NodeKind::StartEnd, Position::new(0.0, 0.0));
//! let end = editor.drop_new_node(NodeKind::StartEnd, Position::new(0.0, 200.0));
//! assert_eq!(editor.snapshot().find_node(&start).unwrap().label, "Start");
//! assert_eq!(editor.snapshot().find_node(&end).unwrap().label, "End");
//!
//! editor.propose_connection(&start, &end, None, None).unwrap();
//!
//! // A second flow out of the same handle is refused.
//! assert!(editor.propose_connection(&start, &end, None, None).is_err());
//!
//! let config = *editor.config();
//! let edge = &editor.snapshot().edges()[0];
//! let anchors = default_anchors(editor.snapshot(), edge, &config.drop).unwrap();
//! let path = route_edge(editor.snapshot(), edge, &anchors, &config.routing);
//! assert_eq!(path.to_svg_path(), "M50,40 L50,120 L50,120 L50,200");
//!
//! editor.undo();
//! assert!(editor.snapshot().edges().is_empty());
//! ```

pub mod config;
pub mod connection;
pub mod editor;
pub mod error;
pub mod graph;
pub mod history;
pub mod prelude;
pub mod preset;
pub mod routing;
pub mod ui;

pub use editor::Editor;
