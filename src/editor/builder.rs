use super::Editor;
use super::ids::{IdSource, RandomIds};
use crate::config::EditorConfig;
use crate::graph::Graph;
use crate::history::History;

/// Configures an `Editor` before it is created.
///
/// ```rust
/// use progressflow::prelude::*;
///
/// let editor = Editor::builder()
///     .with_ids(SequentialIds::new())
///     .with_config(EditorConfig::default())
///     .build();
/// assert!(editor.snapshot().is_empty());
/// ```
pub struct EditorBuilder {
    config: EditorConfig,
    ids: Box<dyn IdSource>,
    initial: Graph,
}

impl EditorBuilder {
    pub fn new() -> Self {
        Self {
            config: EditorConfig::default(),
            ids: Box::new(RandomIds::new()),
            initial: Graph::new(),
        }
    }

    pub fn with_config(mut self, config: EditorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_ids(mut self, ids: impl IdSource + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    /// Starts the session from an existing graph instead of an empty canvas.
    /// The starting graph is the bottom of the undo stack.
    pub fn with_graph(mut self, graph: Graph) -> Self {
        self.initial = graph;
        self
    }

    pub fn build(self) -> Editor {
        Editor {
            history: History::new(self.initial),
            config: self.config,
            ids: self.ids,
        }
    }
}

impl Default for EditorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
