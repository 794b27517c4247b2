//! Run configuration.

/// Tunable parameters of a pipeline run.  Both knobs default to off; they
/// are explicit settings rather than hidden constants.
#[derive(Copy, Clone, Debug, Default)]
pub struct PipelineConfig {
    /// Maximum great-circle distance (metres) between a demand point and
    /// its snapped vertex.  Points farther out are treated as disconnected.
    /// `None` accepts any snap distance.
    pub max_snap_m: Option<f64>,

    /// Straight-line pre-filter radius (metres).  Demand points farther
    /// than this from *every* facility skip network computation entirely
    /// and land in the disconnected category; the summary reports how many.
    /// `None` disables the filter.
    pub prefilter_radius_m: Option<f64>,
}
