//! Edge drawing: loop classification and the orthogonal router.
//!
//! Nothing here is stored in the graph. Hosts call into this module per edge
//! at render time.

pub mod anchors;
pub mod loops;
pub mod router;

pub use anchors::*;
pub use loops::*;
pub use router::*;
