//! `ca-graph` — street-network graph, spatial indexing, and snapping.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                |
//! |-------------|---------------------------------------------------------|
//! | [`segment`] | `RawSegment` — raw polyline + road classification       |
//! | [`graph`]   | `StreetGraph` (CSR + R-tree), `StreetGraphBuilder`      |
//! | [`snap`]    | `Snap`, `snap_points` node locator                      |
//! | [`error`]   | `GraphError`, `GraphResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                             |
//! |---------|----------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types. |

pub mod error;
pub mod graph;
pub mod segment;
pub mod snap;


pub use error::{GraphError, GraphResult};
pub use graph::{StreetGraph, StreetGraphBuilder};
pub use segment::RawSegment;
pub use snap::{Snap, snap_points};
