// ABOUTME: Merges heterogeneous raw activity streams into one canonical CombinedMetrics record
// ABOUTME: Resolves key aliases, drops non-numeric samples, converts speed, and synthesizes a time axis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_core::models::{CombinedMetrics, RawStreamSet, StreamKind};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

/// Merge raw streams into a [`CombinedMetrics`]
///
/// Unrecognized keys are ignored, non-numeric samples are filtered out, and
/// a series left with no numeric samples counts as absent. When several
/// aliases of one metric are present, the one whose key sorts last wins.
/// Without a time stream, time is synthesized as `0..N` where `N` is the
/// longest metric series.
#[must_use]
pub fn combine(raw: &RawStreamSet) -> CombinedMetrics {
    let mut resolved: BTreeMap<StreamKind, Vec<f64>> = BTreeMap::new();
    let mut ignored = 0_usize;

    for (key, samples) in raw.iter() {
        let Some(kind) = StreamKind::from_key(key) else {
            ignored += 1;
            continue;
        };
        let values = numeric_samples(samples, kind.scale());
        if !values.is_empty() {
            resolved.insert(kind, values);
        }
    }

    let time = resolved.remove(&StreamKind::Time).unwrap_or_else(|| {
        let longest = resolved.values().map(Vec::len).max().unwrap_or(0);
        (0..longest).map(|index| index as f64).collect()
    });

    let base = CombinedMetrics {
        time,
        ..CombinedMetrics::default()
    };
    let metrics = resolved
        .into_iter()
        .fold(base, |metrics, (kind, values)| metrics.with_series(kind, values));

    debug!(
        streams = raw.len(),
        ignored,
        samples = metrics.sample_count(),
        metrics = ?metrics.present_metrics().collect::<Vec<_>>(),
        "Combined activity streams"
    );

    metrics
}

fn numeric_samples(samples: &[Value], scale: f64) -> Vec<f64> {
    samples
        .iter()
        .filter_map(Value::as_f64)
        .filter(|value| value.is_finite())
        .map(|value| value * scale)
        .collect()
}
