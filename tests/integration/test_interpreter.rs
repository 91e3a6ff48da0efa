//! Integration Tests for the Command Interpreter
//!
//! These tests drive `Interpreter::interpret` end to end against a recording
//! launcher and check the observable texts and launch requests.

#[path = "../test_utils/mod.rs"]
mod test_utils;

use launchterm::commands::{Outcome, SessionEffect, HELP_TEXT};
use launchterm::config::{Config, ProgramSpec};
use launchterm::platform::LaunchRequest;
use regex::Regex;
use test_utils::{recording_interpreter, KEYWORDS};

#[test]
fn test_every_keyword_is_known_in_any_case() {
    let (interpreter, _) = recording_interpreter();
    for keyword in KEYWORDS {
        for variant in [keyword.to_string(), keyword.to_uppercase(), capitalize(keyword)] {
            let result = interpreter.interpret(&variant);
            assert!(
                !result.display_text.starts_with("Unknown command"),
                "'{}' was not recognized",
                variant
            );
        }
    }
}

#[test]
fn test_date_format() {
    let (interpreter, launcher) = recording_interpreter();
    let result = interpreter.interpret("date");
    let pattern =
        Regex::new(r"^Current date and time: \d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}$").unwrap();

    assert!(pattern.is_match(&result.display_text), "got {:?}", result.display_text);
    assert_eq!(result.outcome, Outcome::Ok);
    assert!(launcher.requests().is_empty());
}

#[test]
fn test_open_without_argument() {
    let (interpreter, launcher) = recording_interpreter();
    let result = interpreter.interpret("open");
    assert_eq!(result.display_text, "Please specify a website to open.");
    assert_eq!(result.outcome, Outcome::Error);
    assert!(launcher.requests().is_empty(), "nothing should be launched");

    let result = interpreter.interpret("open    ");
    assert_eq!(result.display_text, "Please specify a website to open.");
}

#[test]
fn test_open_prepends_secure_scheme() {
    let (interpreter, launcher) = recording_interpreter();
    let result = interpreter.interpret("open example.com");

    assert_eq!(result.display_text, "Opening https://example.com...");
    assert_eq!(
        launcher.requests(),
        vec![LaunchRequest::OpenUri("https://example.com".to_string())]
    );
}

#[test]
fn test_open_keeps_existing_scheme() {
    let (interpreter, launcher) = recording_interpreter();
    interpreter.interpret("OPEN http://Example.com/Path");
    assert_eq!(
        launcher.last_request(),
        Some(LaunchRequest::OpenUri("http://Example.com/Path".to_string()))
    );
}

#[test]
fn test_fixed_sites() {
    let (interpreter, launcher) = recording_interpreter();
    let sites = Config::default().sites;

    let cases = [
        ("moodle", "Opening Moodle website...", sites.moodle),
        ("erp", "Opening WCE ERP website...", sites.erp),
        ("slogin", "Opening WCE Student Login website...", sites.slogin),
    ];
    for (keyword, text, url) in cases {
        let result = interpreter.interpret(keyword);
        assert_eq!(result.display_text, text);
        assert_eq!(launcher.last_request(), Some(LaunchRequest::OpenUri(url)));
    }
}

#[test]
fn test_spawned_programs() {
    let (interpreter, launcher) = recording_interpreter();
    let programs = Config::default().programs;

    let cases: [(&str, &str, ProgramSpec); 5] = [
        ("calc", "Opening calculator...", programs.calculator),
        ("notes", "Opening notepad...", programs.text_editor),
        ("files", "Opening explorer...", programs.file_browser),
        ("shutdown", "Shutting down the PC...", programs.shutdown),
        ("restart", "Restarting the PC...", programs.restart),
    ];
    for (keyword, text, spec) in cases {
        let result = interpreter.interpret(keyword);
        assert_eq!(result.display_text, text);
        assert_eq!(launcher.last_request(), Some(LaunchRequest::Spawn(spec)));
    }
}

#[test]
fn test_office_paths() {
    let (interpreter, launcher) = recording_interpreter();
    let office = Config::default().office;

    assert_eq!(interpreter.interpret("word").display_text, "Opening Microsoft Word...");
    assert_eq!(launcher.last_request(), Some(LaunchRequest::OpenPath(office.word)));

    assert_eq!(
        interpreter.interpret("ppt").display_text,
        "Opening Microsoft PowerPoint..."
    );
    assert_eq!(launcher.last_request(), Some(LaunchRequest::OpenPath(office.ppt)));
}

#[test]
fn test_help_text_is_verbatim() {
    let (interpreter, _) = recording_interpreter();
    let result = interpreter.interpret("help");
    assert_eq!(result.display_text, HELP_TEXT);
    assert!(result
        .display_text
        .starts_with("Available commands(Commands are case insensitive):\n"));
    assert!(result.display_text.ends_with("exit - Close the terminal.\n"));
    assert_eq!(result.display_text.lines().count(), 15);
}

#[test]
fn test_mixed_case_help_matches() {
    let (interpreter, _) = recording_interpreter();
    assert_eq!(interpreter.interpret("HeLp"), interpreter.interpret("help"));
}

#[test]
fn test_cls_requests_clear() {
    let (interpreter, _) = recording_interpreter();
    let result = interpreter.interpret("CLS");
    assert_eq!(result.display_text, "Commands cleared.");
    assert_eq!(result.effect, SessionEffect::ClearTranscript);
}

#[test]
fn test_exit_signals_termination() {
    let (interpreter, launcher) = recording_interpreter();
    let result = interpreter.interpret("exit");
    assert_eq!(result.outcome, Outcome::Exit);
    assert!(!result.display_text.is_empty());
    assert!(launcher.requests().is_empty());
}

#[test]
fn test_custom_config_flows_to_handlers() {
    let mut config = Config::default();
    config.open.default_scheme = "http://".to_string();
    config.sites.moodle = "https://moodle.example.org/".to_string();

    let launcher = std::rc::Rc::new(launchterm::platform::RecordingLauncher::new());
    let interpreter = launchterm::Interpreter::with_launcher(config, launcher.clone());

    interpreter.interpret("open intranet");
    interpreter.interpret("moodle");
    assert_eq!(
        launcher.requests(),
        vec![
            LaunchRequest::OpenUri("http://intranet".to_string()),
            LaunchRequest::OpenUri("https://moodle.example.org/".to_string()),
        ]
    );
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
