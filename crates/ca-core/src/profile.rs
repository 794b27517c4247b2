//! Travel-mode cost profiles.
//!
//! A profile maps a road classification string to a cost multiplier.  Edge
//! traversal cost is `physical length × multiplier`, so a multiplier of 1.0
//! means cost equals metres and larger values penalise a road class for the
//! mode.  A class the mode cannot use at all gets no multiplier (or one at
//! or above the non-routable sentinel) and its edges never enter the
//! routable graph.

use std::collections::HashMap;

/// Classification → cost-multiplier table for one travel mode.
#[derive(Clone, Debug)]
pub struct ModeProfile {
    multipliers: HashMap<String, f64>,
    /// Multiplier applied to classifications absent from the table.
    /// `None` drops unknown classes as non-routable.
    fallback: Option<f64>,
    /// Multipliers at or above this value mark a class non-routable.
    /// Suppliers that encode exclusion as a huge multiplier set this to
    /// their sentinel; the default of infinity accepts any finite value.
    sentinel: f64,
}

impl ModeProfile {
    pub fn new() -> Self {
        Self {
            multipliers: HashMap::new(),
            fallback: None,
            sentinel: f64::INFINITY,
        }
    }

    /// Set the multiplier for one classification.
    pub fn with_class(mut self, class: &str, multiplier: f64) -> Self {
        self.multipliers.insert(class.to_string(), multiplier);
        self
    }

    /// Multiplier for classifications not present in the table.
    pub fn with_fallback(mut self, multiplier: f64) -> Self {
        self.fallback = Some(multiplier);
        self
    }

    /// Threshold at or above which a multiplier means "non-routable".
    pub fn with_sentinel(mut self, sentinel: f64) -> Self {
        self.sentinel = sentinel;
        self
    }

    /// The effective multiplier for `class`, or `None` if the class is not
    /// routable under this profile.
    pub fn multiplier(&self, class: &str) -> Option<f64> {
        let raw = self.multipliers.get(class).copied().or(self.fallback)?;
        if raw >= self.sentinel {
            None
        } else {
            Some(raw)
        }
    }

    /// Pedestrian profile: footways and minor streets at cost = metres,
    /// busier roads penalised, grade-separated roads excluded.
    pub fn walking() -> Self {
        Self::new()
            .with_class("footway", 1.0)
            .with_class("path", 1.0)
            .with_class("pedestrian", 1.0)
            .with_class("steps", 1.2)
            .with_class("living_street", 1.0)
            .with_class("residential", 1.0)
            .with_class("service", 1.0)
            .with_class("unclassified", 1.0)
            .with_class("tertiary", 1.1)
            .with_class("secondary", 1.2)
            .with_class("primary", 1.3)
            .with_class("cycleway", 1.0)
            // No pedestrian access:
            .with_fallback(1.1)
            .with_class("motorway", f64::INFINITY)
            .with_class("motorway_link", f64::INFINITY)
            .with_class("trunk", f64::INFINITY)
            .with_class("trunk_link", f64::INFINITY)
    }

    /// Car profile: multipliers are inverse relative speeds, normalised so
    /// a residential street costs its length in metres.
    pub fn driving() -> Self {
        Self::new()
            .with_class("motorway", 0.31)
            .with_class("motorway_link", 0.31)
            .with_class("trunk", 0.36)
            .with_class("trunk_link", 0.36)
            .with_class("primary", 0.44)
            .with_class("primary_link", 0.44)
            .with_class("secondary", 0.50)
            .with_class("secondary_link", 0.50)
            .with_class("tertiary", 0.66)
            .with_class("tertiary_link", 0.66)
            .with_class("residential", 1.0)
            .with_class("living_street", 1.0)
            .with_class("service", 1.33)
            .with_class("unclassified", 1.33)
            // Not drivable:
            .with_class("footway", f64::INFINITY)
            .with_class("path", f64::INFINITY)
            .with_class("cycleway", f64::INFINITY)
            .with_class("pedestrian", f64::INFINITY)
            .with_class("steps", f64::INFINITY)
            .with_class("track", f64::INFINITY)
            // Unknown road type — cautious default rather than dropping.
            .with_fallback(1.0)
    }
}

impl Default for ModeProfile {
    fn default() -> Self {
        Self::new()
    }
}
