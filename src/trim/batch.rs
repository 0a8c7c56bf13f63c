//! Trimming many frames at once.
//!
//! Frames are independent, so a batch is trimmed in parallel with rayon when
//! asked to. Output order always matches input order.

use super::types::{RawName, TrimOptions};
use super::trim_tagged;
use rayon::prelude::*;
use serde::Serialize;

/// One trimmed frame, as written by the `json` output format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrimmedName {
    pub function: String,
    pub platform: String,
    pub trimmed: String,
}

impl TrimmedName {
    fn from_raw(raw: &RawName, options: &TrimOptions) -> Self {
        Self {
            function: raw.function.clone(),
            platform: raw.platform.clone(),
            trimmed: trim_tagged(&raw.function, &raw.platform, options),
        }
    }
}

/// Trim every frame in `frames`, preserving order.
pub fn trim_batch(frames: &[RawName], options: &TrimOptions, parallel: bool) -> Vec<TrimmedName> {
    log::debug!(
        "trimming {} frames ({})",
        frames.len(),
        if parallel { "parallel" } else { "sequential" }
    );

    if parallel {
        frames
            .par_iter()
            .map(|raw| TrimmedName::from_raw(raw, options))
            .collect()
    } else {
        frames
            .iter()
            .map(|raw| TrimmedName::from_raw(raw, options))
            .collect()
    }
}
