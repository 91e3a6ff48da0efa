//! Command handlers
//!
//! Each handler validates its own argument, performs at most one external
//! operation through the [`Launcher`](crate::platform::Launcher), and turns
//! the outcome into a [`CommandResult`]. Failures are logged here and never
//! escape.

use chrono::Local;
use once_cell::sync::Lazy;
use regex::Regex;

use super::registry::{HandlerContext, HELP_TEXT};
use super::result::{CommandResult, SessionEffect};
use crate::config::ProgramSpec;
use crate::error::Result;

/// Matches a leading `scheme://`
static SCHEME_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://").expect("scheme pattern is valid"));

/// Prepend `default_scheme` unless `target` already has a scheme
pub fn normalize_url(target: &str, default_scheme: &str) -> String {
    if SCHEME_PREFIX.is_match(target) {
        target.to_string()
    } else {
        format!("{}{}", default_scheme, target)
    }
}

/// Map a launch attempt to the fixed success / failure texts
fn report(what: &str, attempt: Result<()>, success: String, failure: &str) -> CommandResult {
    match attempt {
        Ok(()) => {
            info!("Launched {}", what);
            CommandResult::ok(success)
        }
        Err(e) => {
            warn!(error = %e, "Failed to launch {}", what);
            CommandResult::error(failure)
        }
    }
}

fn spawn(
    ctx: &HandlerContext<'_>,
    spec: &ProgramSpec,
    success: &str,
    failure: &str,
) -> CommandResult {
    report(
        &spec.display(),
        ctx.launcher.spawn_detached(spec),
        success.to_string(),
        failure,
    )
}

fn browse(ctx: &HandlerContext<'_>, url: &str, success: &str, failure: &str) -> CommandResult {
    report(url, ctx.launcher.open_uri(url), success.to_string(), failure)
}

pub fn date(_ctx: &HandlerContext<'_>, _arg: Option<&str>) -> CommandResult {
    let now = Local::now().format("%Y-%m-%d %H:%M:%S");
    CommandResult::ok(format!("Current date and time: {}", now))
}

pub fn open(ctx: &HandlerContext<'_>, arg: Option<&str>) -> CommandResult {
    let Some(target) = arg.map(str::trim).filter(|t| !t.is_empty()) else {
        return CommandResult::error("Please specify a website to open.");
    };

    let url = normalize_url(target, &ctx.config.open.default_scheme);
    report(
        &url,
        ctx.launcher.open_uri(&url),
        format!("Opening {}...", url),
        "Error: Unable to open website.",
    )
}

pub fn calc(ctx: &HandlerContext<'_>, _arg: Option<&str>) -> CommandResult {
    spawn(
        ctx,
        &ctx.config.programs.calculator,
        "Opening calculator...",
        "Error: Unable to open calculator.",
    )
}

pub fn notes(ctx: &HandlerContext<'_>, _arg: Option<&str>) -> CommandResult {
    spawn(
        ctx,
        &ctx.config.programs.text_editor,
        "Opening notepad...",
        "Error: Unable to open notepad.",
    )
}

pub fn files(ctx: &HandlerContext<'_>, _arg: Option<&str>) -> CommandResult {
    spawn(
        ctx,
        &ctx.config.programs.file_browser,
        "Opening explorer...",
        "Error: Unable to open explorer.",
    )
}

pub fn cls(_ctx: &HandlerContext<'_>, _arg: Option<&str>) -> CommandResult {
    CommandResult::ok("Commands cleared.").with_effect(SessionEffect::ClearTranscript)
}

pub fn moodle(ctx: &HandlerContext<'_>, _arg: Option<&str>) -> CommandResult {
    browse(
        ctx,
        &ctx.config.sites.moodle,
        "Opening Moodle website...",
        "Error: Unable to open Moodle website.",
    )
}

pub fn erp(ctx: &HandlerContext<'_>, _arg: Option<&str>) -> CommandResult {
    browse(
        ctx,
        &ctx.config.sites.erp,
        "Opening WCE ERP website...",
        "Error: Unable to open ERP website.",
    )
}

pub fn slogin(ctx: &HandlerContext<'_>, _arg: Option<&str>) -> CommandResult {
    browse(
        ctx,
        &ctx.config.sites.slogin,
        "Opening WCE Student Login website...",
        "Error: Unable to open Student Login website.",
    )
}

pub fn word(ctx: &HandlerContext<'_>, _arg: Option<&str>) -> CommandResult {
    let path = &ctx.config.office.word;
    report(
        &path.display().to_string(),
        ctx.launcher.open_path(path),
        "Opening Microsoft Word...".to_string(),
        "Error: Unable to open Microsoft Word.",
    )
}

pub fn ppt(ctx: &HandlerContext<'_>, _arg: Option<&str>) -> CommandResult {
    let path = &ctx.config.office.ppt;
    report(
        &path.display().to_string(),
        ctx.launcher.open_path(path),
        "Opening Microsoft PowerPoint...".to_string(),
        "Error: Unable to open Microsoft PowerPoint.",
    )
}

pub fn shutdown(ctx: &HandlerContext<'_>, _arg: Option<&str>) -> CommandResult {
    spawn(
        ctx,
        &ctx.config.programs.shutdown,
        "Shutting down the PC...",
        "Error: Unable to shutdown the PC.",
    )
}

pub fn restart(ctx: &HandlerContext<'_>, _arg: Option<&str>) -> CommandResult {
    spawn(
        ctx,
        &ctx.config.programs.restart,
        "Restarting the PC...",
        "Error: Unable to restart the PC.",
    )
}

pub fn help(_ctx: &HandlerContext<'_>, _arg: Option<&str>) -> CommandResult {
    CommandResult::ok(HELP_TEXT)
}

pub fn exit(_ctx: &HandlerContext<'_>, _arg: Option<&str>) -> CommandResult {
    CommandResult::exit("Closing the terminal...")
}
