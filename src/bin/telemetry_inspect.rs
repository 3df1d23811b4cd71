// ABOUTME: Diagnostic CLI that runs the telemetry engine over JSON dumps and encoded routes
// ABOUTME: Prints combined metrics, curve summaries, power curve lookups, and decoded routes as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Telemetry inspection CLI
//!
//! Usage:
//! ```bash
//! # Summarize activity streams and inspect the sample at 40% of the chart
//! pierre-telemetry-inspect streams --input streams.json --tap 0.4
//!
//! # Resolve a tap on a power curve payload with an explicit FTP
//! pierre-telemetry-inspect power-curve --input power_curve.json --tap 0.5 --ftp 250
//!
//! # Decode an encoded polyline
//! pierre-telemetry-inspect route --polyline '_p~iF~ps|U_ulLnnqC_mqNvxq`@'
//!
//! # Parse a "lat,lng;lat,lng" route file
//! pierre-telemetry-inspect route --pairs-file route.txt
//! ```

use anyhow::{anyhow, bail, Result};
use clap::{Parser, Subcommand};
use pierre_telemetry::algorithms::{chart_overlay, stream_aggregator, PowerCurveResolver};
use pierre_telemetry::logging::{LogFormat, LoggingConfig};
use pierre_telemetry::models::{
    PowerCurveResponse, RawStreamSet, RouteBounds, StreamKind, StreamsEnvelope,
};
use pierre_telemetry::{ChartOverlay, TelemetryEngine};
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "pierre-telemetry-inspect",
    about = "Inspect activity telemetry with the Pierre telemetry engine",
    long_about = "Runs stream aggregation, curve processing, power curve resolution, and route decoding over local JSON dumps and prints the results."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Combine raw streams and summarize the rendered curves
    Streams {
        /// JSON file with a stream map or a `{"source", "streams"}` envelope
        #[arg(long, short = 'i')]
        input: PathBuf,

        /// Chart tap position in [0, 1]
        #[arg(long)]
        tap: Option<f64>,

        /// FTP in watts for power zone bands
        #[arg(long)]
        ftp: Option<f64>,

        /// Threshold heart rate in bpm for heart rate zone bands
        #[arg(long)]
        fthr: Option<f64>,
    },

    /// Query a power curve payload
    PowerCurve {
        /// JSON file with `powerCurve` columns and `referenceData`
        #[arg(long, short = 'i')]
        input: PathBuf,

        /// Chart tap position in [0, 1]
        #[arg(long)]
        tap: Option<f64>,

        /// FTP override in watts
        #[arg(long)]
        ftp: Option<f64>,
    },

    /// Decode a route
    Route {
        /// Encoded polyline string
        #[arg(long, conflicts_with = "pairs_file")]
        polyline: Option<String>,

        /// File holding a `lat,lng;lat,lng` coordinate string
        #[arg(long)]
        pairs_file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig {
        level: if cli.verbose { "debug" } else { "warn" }.into(),
        format: LogFormat::Compact,
        ..LoggingConfig::from_env()
    };
    logging.init()?;

    let engine = TelemetryEngine::from_env();
    info!(config = ?engine.config(), "Telemetry engine ready");

    let output = match cli.command {
        Command::Streams {
            input,
            tap,
            ftp,
            fthr,
        } => inspect_streams(&engine, &input, tap, ftp, fthr)?,
        Command::PowerCurve { input, tap, ftp } => {
            inspect_power_curve(&engine, &input, tap, ftp)?
        }
        Command::Route {
            polyline,
            pairs_file,
        } => inspect_route(&engine, polyline.as_deref(), pairs_file.as_deref())?,
    };

    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{rendered}");
    Ok(())
}

fn read_json(path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path)
        .map_err(|error| anyhow!("failed to read {}: {error}", path.display()))?;
    serde_json::from_str(&text)
        .map_err(|error| anyhow!("{} is not valid JSON: {error}", path.display()))
}

fn load_streams(path: &Path) -> Result<(Option<String>, RawStreamSet)> {
    let value = read_json(path)?;
    if value.get("streams").is_some() {
        let envelope: StreamsEnvelope = serde_json::from_value(value)?;
        Ok((envelope.source, envelope.streams))
    } else {
        Ok((None, serde_json::from_value(value)?))
    }
}

fn inspect_streams(
    engine: &TelemetryEngine,
    input: &Path,
    tap: Option<f64>,
    ftp: Option<f64>,
    fthr: Option<f64>,
) -> Result<Value> {
    let (source, raw) = load_streams(input)?;
    let metrics = stream_aggregator::combine(&raw);
    let duration = metrics.duration_seconds();

    let curves: Vec<Value> = engine
        .render_all(&metrics)
        .iter()
        .map(|metric| {
            let threshold = match metric.kind {
                StreamKind::Power => ftp,
                StreamKind::HeartRate => fthr,
                _ => None,
            };
            let overlay = ChartOverlay::for_metric(metric, threshold, duration);
            json!({
                "metric": metric.kind,
                "unit": metric.kind.unit(),
                "points": metric.curve.len(),
                "value_range": metric.curve.value_range(),
                "zone_bands": overlay.bands.len(),
                "threshold_y": overlay.threshold_y,
            })
        })
        .collect();

    let marker = tap.and_then(|progress| engine.marker_at(&metrics, progress));

    Ok(json!({
        "source": source,
        "streams": raw.len(),
        "samples": metrics.sample_count(),
        "duration_seconds": duration,
        "time_grid_lines": chart_overlay::time_grid(duration).len(),
        "curves": curves,
        "marker": marker,
    }))
}

fn inspect_power_curve(
    engine: &TelemetryEngine,
    input: &Path,
    tap: Option<f64>,
    ftp: Option<f64>,
) -> Result<Value> {
    let text = fs::read_to_string(input)
        .map_err(|error| anyhow!("failed to read {}: {error}", input.display()))?;
    let curve = PowerCurveResponse::from_json(&text)?;
    if curve.is_empty() {
        bail!("{} holds an empty power curve", input.display());
    }

    let resolver = PowerCurveResolver::new(&curve);
    let reference_ftp = ftp.or_else(|| curve.user_ftp());

    Ok(json!({
        "points": curve.len(),
        "power_range": curve.power_range(),
        "user_ftp": reference_ftp,
        "ftp_line": reference_ftp.and_then(|watts| resolver.threshold_fraction(watts)),
        "key_efforts": resolver.key_efforts(ftp),
        "axis_ticks": engine.power_axis_ticks(&curve),
        "comparison": engine.comparison_series(&curve),
        "marker": tap.and_then(|fraction| resolver.marker_for_tap(fraction, ftp)),
    }))
}

fn inspect_route(
    engine: &TelemetryEngine,
    polyline: Option<&str>,
    pairs_file: Option<&Path>,
) -> Result<Value> {
    let points = match (polyline, pairs_file) {
        (Some(encoded), _) => engine.decode_route(encoded),
        (None, Some(path)) => {
            let pairs = fs::read_to_string(path)
                .map_err(|error| anyhow!("failed to read {}: {error}", path.display()))?;
            engine.route_from_pairs(&pairs)
        }
        (None, None) => bail!("pass --polyline or --pairs-file"),
    };

    if points.is_empty() {
        bail!("invalid route data: no coordinates decoded");
    }

    let bounds = RouteBounds::from_points(&points);
    Ok(json!({
        "points": points.len(),
        "bounds": bounds,
        "center": bounds.map(|bounds| bounds.center()),
        "first": points.first(),
        "last": points.last(),
    }))
}
