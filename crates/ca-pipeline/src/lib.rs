//! `ca-pipeline` — one-shot orchestration of the whole catchment
//! computation.
//!
//! # Crate layout
//!
//! | Module     | Contents                                             |
//! |------------|------------------------------------------------------|
//! | [`input`]  | CRS-tagged input bundles                             |
//! | [`config`] | `PipelineConfig` (snap radius, pre-filter radius)    |
//! | [`run`]    | `CatchmentPipeline`, `RunOutput`                     |
//! | [`error`]  | `PipelineError`, `PipelineResult<T>`                 |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Rayon-parallel routing; concurrent output branches.     |

pub mod config;
pub mod error;
pub mod input;
pub mod run;


pub use config::PipelineConfig;
pub use error::{PipelineError, PipelineResult};
pub use input::{DemandData, FacilityData, StreetData, StudyBoundary};
pub use run::{CatchmentPipeline, RunOutput};
