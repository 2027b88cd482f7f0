//! Block-report rendering.
//!
//! Formats a BLOCK verdict into a box-drawn diagnostic. The field order,
//! wording tokens (`Detected`, `Required`, `Command`, numbered steps, `See:`)
//! and border alignment are a bit-exact output contract — scripted consumers
//! scrape this text. Rendering is a pure function of the verdict; the caller
//! emits the returned string.

pub mod width;

use crate::detect::ToolIdentity;
use crate::policy::{Blocked, Command};
use width::{display_width, truncate_to_width};

/// Columns between the two border characters. Fixed so every report is the
/// same width regardless of content.
const INNER_WIDTH: usize = 60;
/// Left margin inside the box.
const MARGIN: usize = 2;

/// Render a BLOCK verdict into the boxed diagnostic.
pub fn render(blocked: &Blocked, required: ToolIdentity, reference_url: &str) -> String {
    let detected = &blocked.evidence;
    let suggested = Command::new(
        required.command_name(),
        blocked.command.args.clone(),
    );

    let mut body: Vec<String> = Vec::new();
    body.push(format!("⛔ Blocked: this project uses {required}"));
    body.push(String::new());
    body.push(format!(
        "Detected:  {} ({})",
        detected.identity, detected.method
    ));
    body.push(format!("Required:  {required}"));
    body.push(format!("Command:   {}", blocked.command.display()));
    body.push(String::new());
    body.push("To fix:".to_string());
    for (i, step) in remediation_steps(blocked, &suggested).iter().enumerate() {
        body.push(format!("  {}. {step}", i + 1));
    }
    body.push(String::new());
    body.push(format!("See: {reference_url}"));

    let mut out = String::new();
    out.push('╔');
    out.push_str(&"═".repeat(INNER_WIDTH));
    out.push_str("╗\n");
    for line in &body {
        out.push_str(&boxed_line(line));
        out.push('\n');
    }
    out.push('╚');
    out.push_str(&"═".repeat(INNER_WIDTH));
    out.push('╝');
    out
}

/// Numbered remediation steps for the detected tool.
fn remediation_steps(blocked: &Blocked, suggested: &Command) -> Vec<String> {
    let mut steps = Vec::new();
    if let Some(lock) = blocked.evidence.identity.lock_file() {
        steps.push(format!("Remove {lock} if it was created"));
    }
    steps.push(format!("Re-run with \"{}\"", suggested.display()));
    steps
}

/// A single content line, right-padded so the right border aligns.
fn boxed_line(content: &str) -> String {
    let avail = INNER_WIDTH - MARGIN;
    let content = truncate_to_width(content, avail);
    let pad = avail - display_width(&content);
    format!("║{}{}{}║", " ".repeat(MARGIN), content, " ".repeat(pad))
}
