use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use envihdr::core::params::LOG_FILE_NAME;
use envihdr::{BatchParams, SensorTable};

use super::args::CliArgs;
use super::errors::AppError;

#[derive(Debug)]
struct Resolved {
    input_dir: PathBuf,
    output_dir: PathBuf,
    sensor_id: Option<String>,
    log_file: bool,
}

impl Resolved {
    /// The mirrored log file, unless disabled.
    fn log_path(&self) -> Option<PathBuf> {
        self.log_file.then(|| self.output_dir.join(LOG_FILE_NAME))
    }
}

fn resolve_params(args: &CliArgs) -> Result<Resolved, AppError> {
    let mut params = args.batch_params();
    if let Some(path) = &args.params {
        params = params.or(BatchParams::from_json_file(path)?);
    }

    let input_dir = params.input_dir.ok_or(AppError::MissingArgument {
        arg: "--input-dir".to_string(),
    })?;
    let output_dir = params.output_dir.ok_or(AppError::MissingArgument {
        arg: "--output-dir".to_string(),
    })?;

    Ok(Resolved {
        input_dir,
        output_dir,
        sensor_id: params.sensor_id,
        log_file: params.log_file.unwrap_or(true),
    })
}

/// Console logging, plus an appending plain-text copy in `log_file` if given.
fn init_logging(verbose: bool, log_file: Option<&Path>) -> Result<(), AppError> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let file_layer = match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            Some(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .init();
    Ok(())
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    let params = resolve_params(&args)?;

    // The log file lives in the output directory, so it must exist first
    fs::create_dir_all(&params.output_dir).map_err(AppError::from)?;
    init_logging(args.verbose, params.log_path().as_deref())?;

    debug!("Start Log");
    info!("Input directory: {:?}", params.input_dir);
    info!("Output directory: {:?}", params.output_dir);
    if let Some(sensor_id) = &params.sensor_id {
        info!("Sensor id override: {}", sensor_id);
    }

    let table = SensorTable::builtin();
    let report = envihdr::run(
        &params.input_dir,
        &params.output_dir,
        params.sensor_id.as_deref(),
        &table,
    )
    .map_err(AppError::from)?;

    if report.failed > 0 {
        warn!(
            "{} of {} rasters failed; see log for details",
            report.failed, report.found
        );
    } else {
        info!("Successfully created header files");
    }

    if let Some(path) = &args.report {
        report.write_json(path).map_err(AppError::from)?;
    }

    Ok(())
}
