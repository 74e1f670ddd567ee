use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const NODE_ID_LEN: usize = 9;

/// Supplies identifiers for new nodes and edges.
///
/// The editor re-draws an id if it collides with one already in the graph,
/// so implementations only need to make collisions unlikely. A source that
/// keeps returning a taken id is drawn a bounded number of times; after that
/// the editor appends `_1`, `_2`, ... to the last draw until it is free.
pub trait IdSource: Send {
    fn node_id(&mut self) -> String;
    fn edge_id(&mut self, source: &str, target: &str) -> String;
}

/// Random node ids (`node_` + 9 base-36 characters) and timestamped edge ids
/// (`{source}-{target}-{millis}`).
#[derive(Debug)]
pub struct RandomIds {
    rng: StdRng,
    last_stamp: u128,
}

impl RandomIds {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            last_stamp: 0,
        }
    }

    /// Reproducible node ids for a given seed. Edge ids still carry the clock.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            last_stamp: 0,
        }
    }

    /// Milliseconds since the epoch, bumped so that two calls never return
    /// the same value.
    fn next_stamp(&mut self) -> u128 {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        self.last_stamp = now.max(self.last_stamp + 1);
        self.last_stamp
    }
}

impl Default for RandomIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for RandomIds {
    fn node_id(&mut self) -> String {
        let suffix: String = (0..NODE_ID_LEN)
            .map(|_| ID_ALPHABET[self.rng.random_range(0..ID_ALPHABET.len())] as char)
            .collect();
        format!("node_{}", suffix)
    }

    fn edge_id(&mut self, source: &str, target: &str) -> String {
        let stamp = self.next_stamp();
        format!("{}-{}-{}", source, target, stamp)
    }
}

/// Counter-based ids (`node_1`, `a-b-2`, ...) for tests and scripted replays.
#[derive(Debug, Default, Clone)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }

    fn bump(&mut self) -> u64 {
        self.next += 1;
        self.next
    }
}

impl IdSource for SequentialIds {
    fn node_id(&mut self) -> String {
        format!("node_{}", self.bump())
    }

    fn edge_id(&mut self, source: &str, target: &str) -> String {
        format!("{}-{}-{}", source, target, self.bump())
    }
}
