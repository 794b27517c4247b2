//! Per-area population counts and age-bracket incidence rates.
//!
//! Both tables are external inputs held read-only by the aggregator.  The
//! bracket names are opaque strings; the only requirement is that the
//! demographics table and the rate table agree on them.

use std::collections::BTreeMap;

/// Population count per age bracket, per statistical area.
#[derive(Clone, Debug, Default)]
pub struct AreaDemographics {
    areas: BTreeMap<String, BTreeMap<String, f64>>,
}

impl AreaDemographics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add population to `(area, bracket)`.  Repeated inserts accumulate.
    pub fn insert(&mut self, area: &str, bracket: &str, population: f64) {
        *self
            .areas
            .entry(area.to_string())
            .or_default()
            .entry(bracket.to_string())
            .or_insert(0.0) += population;
    }

    pub fn population(&self, area: &str, bracket: &str) -> f64 {
        self.areas
            .get(area)
            .and_then(|b| b.get(bracket))
            .copied()
            .unwrap_or(0.0)
    }

    /// Expected event count for one area: Σ population(bracket) ×
    /// rate(bracket).  Unknown areas and brackets without a rate contribute
    /// zero.
    pub fn expected_cases(&self, rates: &IncidenceRates, area: &str) -> f64 {
        let Some(brackets) = self.areas.get(area) else {
            return 0.0;
        };
        brackets
            .iter()
            .map(|(bracket, &population)| population * rates.rate(bracket))
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}

/// Per-person incidence rate per age bracket.
#[derive(Clone, Debug, Default)]
pub struct IncidenceRates {
    rates: BTreeMap<String, f64>,
}

impl IncidenceRates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-person rate for one bracket (e.g. 747 per 100 000 is
    /// `0.00747`).
    pub fn with_bracket(mut self, bracket: &str, rate: f64) -> Self {
        self.rates.insert(bracket.to_string(), rate);
        self
    }

    /// The per-person rate for `bracket`, zero when unknown.
    pub fn rate(&self, bracket: &str) -> f64 {
        match self.rates.get(bracket) {
            Some(&r) => r,
            None => {
                log::debug!("no incidence rate for bracket {bracket:?}, assuming 0");
                0.0
            }
        }
    }
}
