use crate::config::RoutingConfig;
use crate::error::ParseError;
use crate::graph::{Handle, NodeKind, Position};
use std::fmt;
use std::str::FromStr;

/// Side of a node a handle sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandlePosition {
    Top,
    Bottom,
    Left,
    Right,
}

impl FromStr for HandlePosition {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "top" => Ok(HandlePosition::Top),
            "bottom" => Ok(HandlePosition::Bottom),
            "left" => Ok(HandlePosition::Left),
            "right" => Ok(HandlePosition::Right),
            _ => Err(ParseError::UnknownPosition(s.to_string())),
        }
    }
}

/// A path made only of horizontal and vertical segments.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polyline {
    pub points: Vec<Position>,
}

impl Polyline {
    fn through(points: impl IntoIterator<Item = (f64, f64)>) -> Self {
        Self {
            points: points.into_iter().map(|(x, y)| Position::new(x, y)).collect(),
        }
    }

    /// SVG path data, e.g. `M0,0 L0,50 L100,50 L100,100`.
    pub fn to_svg_path(&self) -> String {
        self.to_string()
    }

    /// Anchor for an edge label: halfway between the two endpoints.
    pub fn midpoint(&self) -> Option<Position> {
        let first = self.points.first()?;
        let last = self.points.last()?;
        Some(Position::new((first.x + last.x) / 2.0, (first.y + last.y) / 2.0))
    }

    /// True when every segment is axis-aligned.
    pub fn is_orthogonal(&self) -> bool {
        self.points
            .windows(2)
            .all(|w| w[0].x == w[1].x || w[0].y == w[1].y)
    }
}

impl fmt::Display for Polyline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.points.iter().enumerate() {
            let command = if i == 0 { 'M' } else { 'L' };
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}{},{}", command, p.x, p.y)?;
        }
        Ok(())
    }
}

/// Everything the router needs to draw one edge.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRequest {
    pub source: Position,
    pub target: Position,
    pub source_position: HandlePosition,
    pub target_position: HandlePosition,
    /// `None` when the source node could not be resolved; such edges take
    /// the default route.
    pub source_kind: Option<NodeKind>,
    /// Carried for hosts that style by target shape; the route shape itself
    /// only depends on the source.
    pub target_kind: Option<NodeKind>,
    pub is_loop: bool,
    pub source_handle: Option<Handle>,
}

impl RouteRequest {
    /// Handles on a loop header sit on fixed sides regardless of what the
    /// host reports: `true` leaves to the right, `false` leaves from the bottom.
    fn effective_source_position(&self) -> HandlePosition {
        match (self.source_kind, self.source_handle) {
            (Some(NodeKind::Iteration), Some(Handle::True)) => HandlePosition::Right,
            (Some(NodeKind::Iteration), Some(Handle::False)) => HandlePosition::Bottom,
            _ => self.source_position,
        }
    }
}

/// Computes the displayed path for an edge.
///
/// This is a fixed decision table keyed on the source shape and handle; no
/// obstacle avoidance is attempted.
pub fn route(request: &RouteRequest, config: &RoutingConfig) -> Polyline {
    let (sx, sy) = (request.source.x, request.source.y);
    let (tx, ty) = (request.target.x, request.target.y);

    if request.is_loop && ty < sy {
        let out = sx + config.loop_offset;
        let above = ty - config.loop_clearance;
        return Polyline::through([(sx, sy), (out, sy), (out, above), (tx, above), (tx, ty)]);
    }

    let position = request.effective_source_position();
    let handle = request.source_handle;
    let side_step = |dx: f64| Polyline::through([(sx, sy), (sx + dx, sy), (sx + dx, ty), (tx, ty)]);
    let drop_down = || {
        let below = sy + config.branch_offset;
        Polyline::through([(sx, sy), (sx, below), (tx, below), (tx, ty)])
    };

    match request.source_kind {
        Some(NodeKind::Selection) => {
            if position == HandlePosition::Left || handle == Some(Handle::False) {
                side_step(-config.branch_offset)
            } else if position == HandlePosition::Right || handle == Some(Handle::True) {
                side_step(config.branch_offset)
            } else {
                drop_down()
            }
        }
        Some(NodeKind::Iteration) => {
            if position == HandlePosition::Bottom || handle == Some(Handle::False) {
                drop_down()
            } else if position == HandlePosition::Right || handle == Some(Handle::True) {
                side_step(config.branch_offset)
            } else {
                mid_split(sx, sy, tx, ty)
            }
        }
        _ => mid_split(sx, sy, tx, ty),
    }
}

/// Vertical to the halfway height, across, then vertical into the target.
fn mid_split(sx: f64, sy: f64, tx: f64, ty: f64) -> Polyline {
    let mid_y = (sy + ty) / 2.0;
    Polyline::through([(sx, sy), (sx, mid_y), (tx, mid_y), (tx, ty)])
}
