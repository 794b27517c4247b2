//! `ca-demand` — who serves each demand point, and how much caseload that
//! implies.
//!
//! # Crate layout
//!
//! | Module           | Contents                                           |
//! |------------------|----------------------------------------------------|
//! | [`assign`]       | `Assignment`, `assign`, `AssignmentSummary`        |
//! | [`demographics`] | `AreaDemographics`, `IncidenceRates`               |
//! | [`aggregate`]    | `CaseloadEstimate`, `aggregate`                    |
//! | [`loader`]       | CSV loaders for all demand-side inputs             |
//! | [`error`]        | `DemandError`, `DemandResult<T>`                   |

pub mod aggregate;
pub mod assign;
pub mod demographics;
pub mod error;
pub mod loader;


pub use aggregate::{CaseloadEstimate, aggregate};
pub use assign::{Assignment, AssignmentSummary, assign, summarize};
pub use demographics::{AreaDemographics, IncidenceRates};
pub use error::{DemandError, DemandResult};
pub use loader::{
    load_demand_csv, load_demand_reader, load_demographics_csv, load_demographics_reader,
    load_facilities_csv, load_facilities_reader, load_rates_csv, load_rates_reader,
};
