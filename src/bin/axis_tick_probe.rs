use date_axis::api::{AxisLayout, DateAxis, DateAxisConfig};
use date_axis::core::{Bounds, TimeValue};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

const USAGE: &str = "usage: axis_tick_probe --input <scenario.json> [--output <path>]";

#[derive(Debug)]
struct CliArgs {
    input: PathBuf,
    output: Option<PathBuf>,
}

/// One probe scenario: an axis setup, the data it sees and optional explicit
/// bounds applied afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ProbeScenario {
    config: DateAxisConfig,
    #[serde(default)]
    data_millis: Vec<i64>,
    #[serde(default)]
    explicit_bounds_millis: Option<[i64; 2]>,
    /// Frame clock samples (ms) replayed through the animator after the
    /// bounds were applied.
    #[serde(default)]
    frames_ms: Vec<u64>,
}

#[derive(Debug, Clone, Serialize)]
struct ProbeFrame {
    at_ms: u64,
    displayed_bounds: Bounds,
    animating: bool,
}

#[derive(Debug, Clone, Serialize)]
struct ProbeReport {
    layout: AxisLayout,
    frames: Vec<ProbeFrame>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let _ = date_axis::telemetry::init_default_tracing();

    let args = parse_args()?;
    let raw = fs::read_to_string(&args.input)
        .map_err(|err| format!("failed to read `{}`: {err}", args.input.display()))?;
    let scenario: ProbeScenario =
        serde_json::from_str(&raw).map_err(|err| format!("invalid json: {err}"))?;

    let report = probe(&scenario)?;
    let rendered = serde_json::to_string_pretty(&report)
        .map_err(|err| format!("failed to serialize report: {err}"))?;

    match args.output {
        Some(path) => fs::write(&path, format!("{rendered}\n"))
            .map_err(|err| format!("failed to write `{}`: {err}", path.display())),
        None => {
            println!("{rendered}");
            Ok(())
        }
    }
}

fn probe(scenario: &ProbeScenario) -> Result<ProbeReport, String> {
    let mut axis = DateAxis::new(scenario.config).map_err(|err| err.to_string())?;

    let data: Vec<TimeValue> = scenario
        .data_millis
        .iter()
        .copied()
        .map(TimeValue::from_millis)
        .collect();
    axis.set_data(&data);

    if let Some([lower, upper]) = scenario.explicit_bounds_millis {
        axis.set_explicit_bounds(TimeValue::from_millis(lower), TimeValue::from_millis(upper))
            .map_err(|err| err.to_string())?;
    }

    let mut frames = Vec::with_capacity(scenario.frames_ms.len());
    for at_ms in scenario.frames_ms.iter().copied() {
        let animating = axis.tick_animation(Duration::from_millis(at_ms));
        let displayed_bounds = axis.displayed_bounds().map_err(|err| err.to_string())?;
        frames.push(ProbeFrame {
            at_ms,
            displayed_bounds,
            animating,
        });
    }

    let layout = axis.layout().map_err(|err| err.to_string())?;
    Ok(ProbeReport { layout, frames })
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut input = None::<PathBuf>;
    let mut output = None::<PathBuf>;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => return Err(format!("unknown argument `{flag}`")),
        }
    }

    let input = input.ok_or_else(|| format!("missing --input\n{USAGE}"))?;
    Ok(CliArgs { input, output })
}
