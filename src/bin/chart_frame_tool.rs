use forecast_chart::core::DurationWindow;
use forecast_chart::wire::{PredictionResponse, StockDataResponse};
use forecast_chart::{ChartPipeline, ChartPipelineConfig, telemetry};
use std::fs;
use std::path::{Path, PathBuf};

const USAGE: &str = "usage: chart_frame_tool --records <path> [--forecast <path>] [--duration <n>] [--config <path>] [--output <path>]";

#[derive(Debug)]
struct CliArgs {
    records: PathBuf,
    forecast: Option<PathBuf>,
    duration: Option<DurationWindow>,
    config: Option<PathBuf>,
    output: Option<PathBuf>,
}

fn main() {
    let _ = telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let mut config = match &args.config {
        Some(path) => {
            ChartPipelineConfig::from_json_str(&read(path)?).map_err(|err| err.to_string())?
        }
        None => ChartPipelineConfig::default(),
    };
    if let Some(duration) = args.duration {
        config.duration = duration;
    }
    let pipeline = ChartPipeline::new(config).map_err(|err| err.to_string())?;

    let records = StockDataResponse::from_json_str(&read(&args.records)?)
        .and_then(StockDataResponse::into_records)
        .map_err(|err| err.to_string())?;
    let forecast = match &args.forecast {
        Some(path) => Some(
            PredictionResponse::from_json_str(&read(path)?)
                .and_then(PredictionResponse::into_forecast)
                .map_err(|err| err.to_string())?,
        ),
        None => None,
    };

    let frame = pipeline.prepare(&records, forecast.as_deref());
    let json = frame
        .to_json_contract_v1_pretty()
        .map_err(|err| err.to_string())?;

    match &args.output {
        Some(path) => fs::write(path, json)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display())),
        None => {
            println!("{json}");
            Ok(())
        }
    }
}

fn read(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|err| format!("failed to read `{}`: {err}", path.display()))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);

    let mut records = None::<PathBuf>;
    let mut forecast = None::<PathBuf>;
    let mut duration = None::<DurationWindow>;
    let mut config = None::<PathBuf>;
    let mut output = None::<PathBuf>;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--records" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --records".to_owned())?;
                records = Some(PathBuf::from(value));
            }
            "--forecast" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --forecast".to_owned())?;
                forecast = Some(PathBuf::from(value));
            }
            "--duration" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --duration".to_owned())?;
                let records = value
                    .parse::<u32>()
                    .map_err(|err| format!("invalid --duration `{value}`: {err}"))?;
                duration = Some(DurationWindow::new(records));
            }
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            other => return Err(format!("unknown argument `{other}`\n{USAGE}")),
        }
    }

    Ok(CliArgs {
        records: records.ok_or_else(|| USAGE.to_owned())?,
        forecast,
        duration,
        config,
        output,
    })
}
