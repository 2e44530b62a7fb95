use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use rds_decode::{init_logger, log_info, Decoder, DecoderConfig, RdsError};

#[derive(Parser)]
#[command(name = "rds-stats")]
#[command(about = "Decode an offline RDS/RBDS group log and print counters")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode <log-path> and print per-group-type counters.
    Stats {
        log_path: Option<PathBuf>,
        /// Use the simple (non-confidence-tracked) PS/RT update path.
        #[arg(long)]
        simple_ps: bool,
    },
}

fn run_stats(log_path: Option<PathBuf>, simple_ps: bool) -> Result<(), RdsError> {
    let log_path = log_path.ok_or(RdsError::MissingLogPath)?;
    let groups = rds_decode::log_reader::read_log(&log_path)?;

    let decoder = Decoder::new(DecoderConfig { advanced_ps_decoding: !simple_ps });
    let mut data = rds_decode::DataRecord::new();

    let mut type_counts = [0u32; 16];
    let mut pi_transitions = 0u32;
    let mut last_pi = None;

    for group in &groups {
        decoder.decode(&mut data, group);
        type_counts[group.group_type().code as usize] += 1;
        if data.is_valid(rds_decode::ValidFields::PI_CODE) {
            if last_pi != Some(data.pi_code) {
                pi_transitions += 1;
                last_pi = Some(data.pi_code);
            }
        }
    }

    log_info(&format!("groups decoded: {}", groups.len()));
    for (code, count) in type_counts.iter().enumerate() {
        if *count > 0 {
            log_info(&format!("  type {code}: {count}"));
        }
    }
    log_info(&format!("pi transitions: {pi_transitions}"));
    log_info(&format!("ps valid: {}", data.ps.valid));
    log_info(&format!("rt valid: {}", data.rt.valid));
    log_info(&format!("af tables: {}", data.af.tables().len()));
    log_info(&format!("block b rejections: {}", data.block_b_rejections));

    Ok(())
}

fn main() -> ExitCode {
    init_logger();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Stats { log_path, simple_ps } => run_stats(log_path, simple_ps),
    };

    match result {
        Ok(()) => ExitCode::from(0),
        Err(RdsError::MissingLogPath) => ExitCode::from(1),
        Err(err @ RdsError::LogFileUnreadable { .. }) => {
            rds_decode::logging::log_error(&err.to_string());
            ExitCode::from(2)
        }
        Err(err @ RdsError::LogFileEmpty(_)) => {
            rds_decode::logging::log_error(&err.to_string());
            ExitCode::from(3)
        }
        Err(err) => {
            rds_decode::logging::log_error(&err.to_string());
            ExitCode::from(2)
        }
    }
}
