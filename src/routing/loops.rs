use crate::graph::Graph;
use ahash::AHashSet;

/// Classifies the edge `source_id -> target_id` as a loop-back edge.
///
/// An edge whose target sits above its source is a loop without further
/// checks, since flowcharts are laid out top to bottom. Otherwise the edge
/// is a loop when `source_id` can already be reached from `target_id` along
/// existing edges.
///
/// The classification only affects how the edge is drawn.
pub fn is_loop(graph: &Graph, source_id: &str, target_id: &str, source_y: f64, target_y: f64) -> bool {
    if target_y < source_y {
        return true;
    }

    let mut visited: AHashSet<&str> = AHashSet::new();
    let mut stack: Vec<&str> = vec![target_id];

    while let Some(current) = stack.pop() {
        if current == source_id {
            return true;
        }
        // Existing cycles would otherwise keep the walk going forever.
        if !visited.insert(current) {
            continue;
        }
        stack.extend(
            graph
                .edges()
                .iter()
                .filter(|e| e.source == current)
                .map(|e| e.target.as_str()),
        );
    }

    false
}
