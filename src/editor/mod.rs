//! The stateful half of the crate: applies user edits to the graph and keeps
//! the undo history.
//!
//! Every successful mutating call takes exactly one checkpoint, so it is
//! undone in one step no matter how many nodes and edges it touched. Calls
//! that fail leave both the graph and the history untouched.

mod builder;
pub mod command;
pub mod ids;

pub use builder::EditorBuilder;
pub use command::{CommandOutcome, EditCommand};
pub use ids::{IdSource, RandomIds, SequentialIds};

use crate::config::EditorConfig;
use crate::connection::validate;
use crate::error::EditError;
use crate::graph::{Direction, Edge, Graph, Handle, Node, NodeKind, Position, ProposedEdge};
use crate::history::History;
use crate::preset::Preset;
use ahash::AHashSet;
use itertools::Itertools;
use tracing::{debug, info, warn};

/// Draws taken from the `IdSource` before a colliding id gets a numeric suffix.
const MAX_ID_DRAWS: usize = 16;

/// First `{base}_{n}` that is not `taken`. Ends because a graph is finite.
fn disambiguate(base: &str, taken: impl Fn(&str) -> bool) -> String {
    let mut suffix = 1usize;
    loop {
        let candidate = format!("{}_{}", base, suffix);
        if !taken(&candidate) {
            warn!(id = %candidate, "id source kept repeating an existing id");
            return candidate;
        }
        suffix += 1;
    }
}

/// Outcome of a bulk delete.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeletionReport {
    pub removed_nodes: usize,
    pub removed_edges: usize,
    /// Ids of the edges added to bridge the removed nodes.
    pub relinked: Vec<String>,
}

impl DeletionReport {
    pub fn is_empty(&self) -> bool {
        self.removed_nodes == 0 && self.removed_edges == 0
    }
}

/// Owns the flowchart and its undo/redo history.
pub struct Editor {
    history: History<Graph>,
    config: EditorConfig,
    ids: Box<dyn IdSource>,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    /// An empty canvas with default config and random ids.
    pub fn new() -> Self {
        EditorBuilder::new().build()
    }

    pub fn builder() -> EditorBuilder {
        EditorBuilder::new()
    }

    /// The current graph. Hosts re-render from this after every call.
    pub fn snapshot(&self) -> &Graph {
        self.history.present()
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Checkpoints the current graph, then makes `next` current.
    fn commit(&mut self, next: Graph) {
        self.history.record_checkpoint();
        self.history.apply_edit(next);
    }

    fn fresh_node_id(&mut self) -> String {
        let mut id = self.ids.node_id();
        let mut draws = 1;
        while self.snapshot().contains_node(&id) {
            if draws == MAX_ID_DRAWS {
                return disambiguate(&id, |candidate| self.snapshot().contains_node(candidate));
            }
            id = self.ids.node_id();
            draws += 1;
        }
        id
    }

    fn fresh_edge_id(&mut self, graph: &Graph, source: &str, target: &str) -> String {
        let mut id = self.ids.edge_id(source, target);
        let mut draws = 1;
        while graph.contains_edge(&id) {
            if draws == MAX_ID_DRAWS {
                return disambiguate(&id, |candidate| graph.contains_edge(candidate));
            }
            id = self.ids.edge_id(source, target);
            draws += 1;
        }
        id
    }

    /// Validates and adds an edge. Returns the new edge's id.
    pub fn propose_connection(
        &mut self,
        source: &str,
        target: &str,
        source_handle: Option<Handle>,
        target_handle: Option<Handle>,
    ) -> Result<String, EditError> {
        let proposed = ProposedEdge {
            source: source.to_string(),
            target: target.to_string(),
            source_handle,
            target_handle,
        };
        if let Err(reason) = validate(self.snapshot(), &proposed) {
            debug!(source, target, %reason, "connection not allowed");
            return Err(reason.into());
        }

        let mut next = self.snapshot().clone();
        let id = self.fresh_edge_id(&next, source, target);
        next.edges.push(proposed.into_edge(id.clone()));
        self.commit(next);
        debug!(edge = %id, "connection added");
        Ok(id)
    }

    /// Adds a new shape with its default label. Returns the new node's id.
    ///
    /// Dropping onto an existing edge splices the node into it: the edge is
    /// replaced by `source -> new` (keeping the original source handle) and
    /// `new -> target`.
    pub fn drop_new_node(&mut self, kind: NodeKind, position: Position) -> String {
        let id = self.fresh_node_id();
        let mut next = self.snapshot().clone();

        let label = kind.default_label(next.start_end_count);
        if kind == NodeKind::StartEnd {
            next.start_end_count += 1;
        }
        let splice = self.edge_under(position).cloned();
        next.nodes.push(Node::new(id.clone(), kind, position, label));

        if let Some(old) = splice {
            next.edges.retain(|e| e.id != old.id);
            let upstream = self.fresh_edge_id(&next, &old.source, &id);
            next.edges.push(Edge {
                id: upstream,
                source: old.source.clone(),
                target: id.clone(),
                source_handle: old.source_handle,
                target_handle: None,
            });
            let downstream = self.fresh_edge_id(&next, &id, &old.target);
            next.edges.push(Edge {
                id: downstream,
                source: id.clone(),
                target: old.target.clone(),
                source_handle: None,
                target_handle: None,
            });
            debug!(node = %id, edge = %old.id, "node spliced into edge");
        }

        self.commit(next);
        debug!(node = %id, %kind, "node added");
        id
    }

    /// The first edge whose straight centre-to-centre segment passes within
    /// the snap distance of `point`.
    fn edge_under(&self, point: Position) -> Option<&Edge> {
        let graph = self.snapshot();
        let drop = &self.config.drop;
        let centre = |n: &Node| {
            Position::new(
                n.position.x + drop.node_width / 2.0,
                n.position.y + drop.node_height / 2.0,
            )
        };

        graph.edges().iter().find(|edge| {
            let (Some(source), Some(target)) = (graph.find_node(&edge.source), graph.find_node(&edge.target)) else {
                return false;
            };
            let (a, b) = (centre(source), centre(target));
            let (dx, dy) = (b.x - a.x, b.y - a.y);
            let length_sq = dx * dx + dy * dy;
            if length_sq == 0.0 {
                return false;
            }
            let t = ((point.x - a.x) * dx + (point.y - a.y) * dy) / length_sq;
            if !(0.0..=1.0).contains(&t) {
                return false;
            }
            let (px, py) = (a.x + t * dx, a.y + t * dy);
            ((point.x - px).powi(2) + (point.y - py).powi(2)).sqrt() < drop.edge_snap_distance
        })
    }

    /// Moves an existing node and detaches every edge leading into it.
    pub fn drop_existing_node(&mut self, id: &str, position: Position) -> Result<(), EditError> {
        let mut next = self.snapshot().clone();
        let node = next
            .find_node_mut(id)
            .ok_or_else(|| EditError::NodeNotFound(id.to_string()))?;
        node.position = position;
        next.edges.retain(|e| e.target != id);
        self.commit(next);
        debug!(node = id, x = position.x, y = position.y, "node moved");
        Ok(())
    }

    /// Removes a node and every edge touching it.
    pub fn delete_node(&mut self, id: &str) -> Result<(), EditError> {
        let mut next = self.snapshot().clone();
        let kind = next
            .find_node(id)
            .map(|n| n.kind)
            .ok_or_else(|| EditError::NodeNotFound(id.to_string()))?;
        if kind == NodeKind::StartEnd {
            next.start_end_count = next.start_end_count.saturating_sub(1);
        }
        next.nodes.retain(|n| n.id != id);
        next.edges.retain(|e| !e.touches(id));
        self.commit(next);
        debug!(node = id, "node deleted");
        Ok(())
    }

    pub fn delete_edge(&mut self, id: &str) -> Result<(), EditError> {
        if !self.snapshot().contains_edge(id) {
            return Err(EditError::EdgeNotFound(id.to_string()));
        }
        let mut next = self.snapshot().clone();
        next.edges.retain(|e| e.id != id);
        self.commit(next);
        debug!(edge = id, "edge deleted");
        Ok(())
    }

    /// Deletes the selected edges, then the selected nodes, bridging the gap
    /// each removed node leaves.
    ///
    /// For every removed node, each surviving predecessor is linked to each
    /// surviving successor with an unlabeled edge (handles are not carried
    /// over). Ids that do not exist are ignored. When nothing matches, no
    /// history entry is recorded.
    pub fn delete_selection<N, E>(&mut self, node_ids: &[N], edge_ids: &[E]) -> DeletionReport
    where
        N: AsRef<str>,
        E: AsRef<str>,
    {
        let current = self.snapshot();
        let doomed_edges: AHashSet<&str> = edge_ids
            .iter()
            .map(|id| id.as_ref())
            .filter(|id| current.contains_edge(id))
            .collect();
        let doomed_nodes: Vec<&Node> = current
            .nodes()
            .iter()
            .filter(|n| node_ids.iter().any(|id| id.as_ref() == n.id))
            .collect();
        if doomed_edges.is_empty() && doomed_nodes.is_empty() {
            return DeletionReport::default();
        }

        // Neighbors include the selected edges.
        let removed: AHashSet<String> = doomed_nodes.iter().map(|n| n.id.clone()).collect();
        let mut bridges: Vec<(String, String)> = Vec::new();
        for node in &doomed_nodes {
            let preds = current.neighbors(&node.id, Direction::Incoming);
            let succs = current.neighbors(&node.id, Direction::Outgoing);
            for (p, s) in preds.iter().cartesian_product(succs.iter()) {
                if !removed.contains(*p) && !removed.contains(*s) {
                    bridges.push((p.to_string(), s.to_string()));
                }
            }
        }

        let mut next = current.clone();
        next.edges.retain(|e| !doomed_edges.contains(e.id.as_str()));

        let terminals = doomed_nodes.iter().filter(|n| n.kind == NodeKind::StartEnd).count();
        next.start_end_count = next.start_end_count.saturating_sub(terminals);

        let edges_before = current.edges().len();
        next.nodes.retain(|n| !removed.contains(&n.id));
        next.edges.retain(|e| !removed.contains(&e.source) && !removed.contains(&e.target));
        let mut report = DeletionReport {
            removed_nodes: removed.len(),
            removed_edges: edges_before - next.edges.len(),
            relinked: Vec::new(),
        };

        for (source, target) in bridges {
            let id = self.fresh_edge_id(&next, &source, &target);
            next.edges.push(Edge {
                id: id.clone(),
                source,
                target,
                source_handle: None,
                target_handle: None,
            });
            report.relinked.push(id);
        }

        self.commit(next);
        debug!(
            nodes = report.removed_nodes,
            edges = report.removed_edges,
            relinked = report.relinked.len(),
            "selection deleted"
        );
        report
    }

    /// Steps back one edit. Returns `false` when there is nothing to undo.
    ///
    /// Undo ends any label editing: focus is never restored from history.
    pub fn undo(&mut self) -> bool {
        let moved = self.history.undo();
        if moved {
            self.stop_editing();
        }
        moved
    }

    /// Re-applies one undone edit. Returns `false` when there is nothing to
    /// redo. Like `undo`, it ends label editing.
    pub fn redo(&mut self) -> bool {
        let moved = self.history.redo();
        if moved {
            self.stop_editing();
        }
        moved
    }

    /// Empties the canvas and resets the Start/End counter.
    pub fn clear_all(&mut self) {
        self.commit(Graph::new());
        info!("canvas cleared");
    }

    /// Replaces the canvas with a built-in example, looked up by name.
    pub fn load_preset(&mut self, name: &str) -> Result<(), EditError> {
        let preset: Preset = name.parse()?;
        self.load(preset);
        Ok(())
    }

    pub fn load(&mut self, preset: Preset) {
        self.commit(preset.graph());
        info!(preset = %preset, "preset loaded");
    }

    /// Commits new label text for a node.
    pub fn set_label(&mut self, id: &str, label: &str) -> Result<(), EditError> {
        let mut next = self.snapshot().clone();
        next.find_node_mut(id)
            .ok_or_else(|| EditError::NodeNotFound(id.to_string()))?
            .label = label.to_string();
        self.commit(next);
        Ok(())
    }

    /// Marks `id` as the node being edited, clearing any other. Focus is not
    /// an edit, so no history entry is recorded.
    pub fn start_editing(&mut self, id: &str) -> Result<(), EditError> {
        if !self.snapshot().contains_node(id) {
            return Err(EditError::NodeNotFound(id.to_string()));
        }
        let mut next = self.snapshot().clone();
        for node in &mut next.nodes {
            node.editing = node.id == id;
        }
        self.history.apply_edit(next);
        Ok(())
    }

    pub fn stop_editing(&mut self) {
        if self.snapshot().editing_node().is_none() {
            return;
        }
        let mut next = self.snapshot().clone();
        for node in &mut next.nodes {
            node.editing = false;
        }
        self.history.apply_edit(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor() -> Editor {
        Editor::builder().with_ids(SequentialIds::new()).build()
    }

    #[test]
    fn failed_edits_leave_history_alone() {
        let mut editor = editor();
        assert_eq!(editor.delete_node("ghost"), Err(EditError::NodeNotFound("ghost".into())));
        assert!(editor.load_preset("Fizz Buzz").is_err());
        assert!(!editor.can_undo());
    }

    #[test]
    fn editing_is_exclusive_and_untracked() {
        let mut editor = editor();
        let a = editor.drop_new_node(NodeKind::Process, Position::new(0.0, 0.0));
        let b = editor.drop_new_node(NodeKind::Process, Position::new(300.0, 0.0));
        editor.start_editing(&a).unwrap();
        editor.start_editing(&b).unwrap();

        let editing: Vec<_> = editor.snapshot().nodes().iter().filter(|n| n.editing).collect();
        assert_eq!(editing.len(), 1);
        assert_eq!(editing[0].id, b);

        editor.stop_editing();
        assert!(editor.snapshot().editing_node().is_none());
        assert_eq!(editor.history.undo_depth(), 2);
    }
}
