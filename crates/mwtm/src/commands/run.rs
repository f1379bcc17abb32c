use std::process::ExitCode;

use mwtm_core::config::Config;
use mwtm_core::{MatchRequest, SkippedRequest, list_monitors, list_windows};
use mwtm_x11::X11Desktop;

/// Moves every window matching each request to its monitor.
///
/// Fails only if the display cannot be opened or the desktop cannot be
/// enumerated. Unknown monitors are skipped.
pub fn execute(
    requests: &[MatchRequest],
    config: &Config,
    display: Option<&str>,
    dry_run: bool,
) -> ExitCode {
    match run(requests, config, display, dry_run) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(
    requests: &[MatchRequest],
    config: &Config,
    display: Option<&str>,
    dry_run: bool,
) -> mwtm_core::Result<()> {
    let desktop = X11Desktop::connect(display)?;
    let monitors = list_monitors(&desktop)?;
    let windows = list_windows(&desktop)?;
    let offset = config.placement.offset();

    if dry_run {
        let plan = mwtm_core::plan(requests, &windows, &monitors, offset);
        for m in &plan.moves {
            println!(
                "0x{:08x}  {}  -> {} at {},{}",
                m.window, m.title, m.monitor, m.x, m.y
            );
        }
        report_skipped(&plan.skipped);
        return Ok(());
    }

    let report = mwtm_core::dispatch(requests, &windows, &monitors, &desktop, offset);
    report_skipped(&report.skipped);
    tracing::debug!(
        moved = report.moved,
        skipped = report.skipped.len(),
        "requests processed"
    );
    Ok(())
}

fn report_skipped(skipped: &[SkippedRequest]) {
    for s in skipped {
        tracing::debug!(
            "skipped '{}' {}: {}",
            s.request.title,
            s.request.monitor,
            s.reason
        );
    }
}
