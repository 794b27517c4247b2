//! `ca-route` — many-to-many network distances.
//!
//! # Crate layout
//!
//! | Module     | Contents                                           |
//! |------------|----------------------------------------------------|
//! | [`engine`] | `shortest_distances` (per-source Dijkstra)         |
//! | [`matrix`] | `DistanceMatrix` with the unreachable marker       |
//! | [`cancel`] | `CancelToken` cooperative cancellation             |
//! | [`error`]  | `RouteError`, `RouteResult<T>`                     |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                            |
//! |------------|---------------------------------------------------|
//! | `parallel` | Distributes per-source searches over Rayon.       |

pub mod cancel;
pub mod engine;
pub mod error;
pub mod matrix;

#[cfg(test)]
mod tests;

pub use cancel::CancelToken;
pub use engine::shortest_distances;
pub use error::{RouteError, RouteResult};
pub use matrix::DistanceMatrix;
