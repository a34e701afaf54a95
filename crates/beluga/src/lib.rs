//! Single-source shortest paths and vertex potentials on weighted digraphs.
//!
//! Edge costs may be negative as long as the graph has no negative-cost
//! cycle. Both entry points share one bounded relaxation engine: the solver
//! seeds it from a designated start vertex, the potential finder from an
//! implicit zero-cost virtual source wired to every vertex.

pub use beluga_graphlib as graphlib;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod model;
pub mod paths;
pub mod potential;
pub mod util;

mod relax;

pub use error::{Error, Result};
pub use model::ShortestPaths;
pub use paths::{shortest_paths, try_shortest_paths};
pub use potential::{find_potential, try_find_potential};
