//! pm-gate: enforce a single package manager per project.
//!
//! `pm-gate <command> [args...]` decides whether the command may run:
//!   - allowlisted utilities and the required package manager run as-is;
//!   - unrelated commands pass through unmodified;
//!   - a disallowed package manager gets a boxed diagnostic and exit 1.
//!
//! `pm-gate --check` is the install-time hook mode: it infers which tool is
//! currently in effect (user agent, then lock artifacts) and blocks when a
//! recognized alternate is driving the install.

use pm_gate::config::Config;
use pm_gate::detect::{self, ToolIdentity};
use pm_gate::error::GateError;
use pm_gate::policy::{AllowReason, Blocked, Command, PolicyEngine, Verdict};
use pm_gate::{dispatch, logging, render, version};

const USAGE: &str = "\
pm-gate: enforce a single package manager per project

Usage:
  pm-gate <command> [args...]   decide, then run or block the command
  pm-gate --check               infer the ambient tool and block alternates
  pm-gate --help                show this message
  pm-gate --version             show version

Exit codes:
  0    allowed or passed through (or the delegated command's own code)
  1    blocked by policy
  2    usage or configuration error
  126  command found but not executable
  127  command not found";

fn main() {
    std::process::exit(real_main());
}

fn real_main() -> i32 {
    logging::init();

    let argv: Vec<String> = std::env::args().skip(1).collect();
    let Some(first) = argv.first() else {
        println!("{USAGE}");
        return 0;
    };

    match first.as_str() {
        "--help" | "-h" => {
            println!("{USAGE}");
            0
        }
        "--version" | "-V" => {
            println!("pm-gate {}", env!("CARGO_PKG_VERSION"));
            0
        }
        "--check" => check_mode(),
        flag if flag.starts_with('-') => {
            eprintln!("pm-gate: unknown option: {flag}\n\n{USAGE}");
            2
        }
        _ => run_mode(&argv),
    }
}

/// Normal mode: decide the command, then delegate or block.
fn run_mode(argv: &[String]) -> i32 {
    let (config, engine) = match load_engine() {
        Ok(pair) => pair,
        Err(code) => return code,
    };

    // from_argv only fails on empty argv, handled by the caller
    let Some(command) = Command::from_argv(argv) else {
        println!("{USAGE}");
        return 0;
    };

    let verdict = engine.decide(&command);
    logging::log_verdict(&command.display(), &verdict);

    match verdict {
        Verdict::Block(blocked) => {
            let url = config.reference_url(engine.required());
            println!("{}", render::render(&blocked, engine.required(), &url));
            1
        }
        Verdict::Allow(AllowReason::RequiredTool) => {
            if let Some(min) = &config.settings.min_version {
                version::advisory_check(engine.required(), min);
            }
            delegate(&command)
        }
        Verdict::Allow(AllowReason::Allowlisted) | Verdict::Passthrough => delegate(&command),
    }
}

/// Install-time hook mode: no explicit command; infer the ambient tool.
fn check_mode() -> i32 {
    let (config, engine) = match load_engine() {
        Ok(pair) => pair,
        Err(code) => return code,
    };

    let user_agent = std::env::var("npm_config_user_agent").ok();
    let dir = std::env::current_dir().unwrap_or_else(|_| ".".into());
    let evidence = detect::infer_ambient_tool(engine.required(), user_agent.as_deref(), &dir);

    if evidence.identity == ToolIdentity::Unknown || evidence.identity == engine.required() {
        return 0;
    }

    // A recognized alternate is driving the install. Synthesize the
    // invocation it implies so the report's Command line is populated.
    let command = Command::new(evidence.identity.command_name(), vec!["install".into()]);
    let blocked = Blocked { evidence, command };
    logging::log_verdict(
        &blocked.command.display(),
        &Verdict::Block(Box::new(blocked.clone())),
    );

    let url = config.reference_url(engine.required());
    println!("{}", render::render(&blocked, engine.required(), &url));
    1
}

fn load_engine() -> Result<(Config, PolicyEngine), i32> {
    let config = Config::load().map_err(|e| report_fatal(&e))?;
    let engine = PolicyEngine::from_config(&config).map_err(|e| report_fatal(&e))?;
    Ok((config, engine))
}

fn report_fatal(err: &GateError) -> i32 {
    eprintln!("pm-gate: {err}");
    err.exit_code()
}

/// Hand off to the real command. On Unix this does not return on success.
fn delegate(command: &Command) -> i32 {
    match dispatch::run(command) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("pm-gate: {err}");
            err.exit_code()
        }
    }
}
