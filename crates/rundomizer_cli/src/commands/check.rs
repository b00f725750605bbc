//! Check command: chi-square self-test of the configured entropy source.

use rundomizer_core::stats::uniformity_check;
use tracing::{info, warn};

use crate::output::OutputFormat;
use crate::session::Session;
use crate::{CliError, Result};

/// Run the check command over `[min, max]` with `trials` draws.
pub fn run(session: &mut Session, min: i64, max: i64, trials: u64) -> Result<String> {
    if trials == 0 {
        return Err(CliError::invalid_argument("trials must be greater than 0"));
    }
    info!(min, max, trials, policy = %session.sampler.policy(), "running uniformity check");

    let report = uniformity_check(&mut session.sampler, min, max, trials)?;
    if !report.passes() {
        warn!(statistic = report.statistic, critical = report.critical, "uniformity check failed");
        return Err(CliError::CheckFailed {
            statistic: report.statistic,
            critical: report.critical,
        });
    }

    match session.format {
        OutputFormat::Text => Ok(format!(
            "Uniformity check passed: {} buckets, {} trials, chi-square {:.3} <= {:.3} (min {}, max {})",
            report.buckets,
            report.trials,
            report.statistic,
            report.critical,
            report.min_count,
            report.max_count
        )),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&report)?),
    }
}
