use std::fmt::Write as _;

use serde::Serialize;

use crate::{
    application::stats::WaitlistStats,
    domain::entities::waitlist_entry::WaitlistEntry,
    use_cases::waitlist::FetchState,
};

pub const LOADING_TEXT: &str = "Loading waitlist data...";
pub const ERROR_TITLE: &str = "Error loading waitlist";
pub const EMPTY_TITLE: &str = "No signups yet";
pub const EMPTY_HINT: &str = "Signups will appear here once people join the waitlist.";

const HEADERS: [&str; 5] = ["Name", "Email", "Occupation", "Role", "Signed Up"];

/// Which of the mutually exclusive screens a state shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Loading,
    Error,
    Empty,
    Table,
}

impl Screen {
    pub fn for_state(state: &FetchState) -> Self {
        if state.is_loading() {
            Screen::Loading
        } else if state.error().is_some() {
            Screen::Error
        } else if state.entries().is_empty() {
            Screen::Empty
        } else {
            Screen::Table
        }
    }
}

pub fn render(state: &FetchState) -> String {
    match Screen::for_state(state) {
        Screen::Loading => format!("{LOADING_TEXT}\n"),
        Screen::Error => render_error(state.error().unwrap_or_default()),
        Screen::Empty | Screen::Table => render_signups(state.entries()),
    }
}

fn render_error(message: &str) -> String {
    let message = sanitize_cell(message);
    format!("{ERROR_TITLE}\n  {message}\n\n[t] Try Again\n")
}

/// Server text is printed to a terminal: control characters (newlines, ESC)
/// are shown escaped so a field cannot add rows or drive the terminal.
pub fn sanitize_cell(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c.is_control() {
            out.extend(c.escape_default());
        } else {
            out.push(c);
        }
    }
    out
}

fn render_signups(entries: &[WaitlistEntry]) -> String {
    let stats = WaitlistStats::from_entries(entries);
    let mut out = String::new();

    out.push_str("Waitlist Signups    [r] Refresh\n\n");
    let _ = write!(
        out,
        "  Total Signups: {}    Event Planners: {}    Vendors: {}",
        stats.total, stats.event_planners, stats.vendors
    );
    if stats.unclassified() > 0 {
        let _ = write!(out, "    Other roles: {}", stats.unclassified());
    }
    out.push_str("\n\n");

    if entries.is_empty() {
        let _ = writeln!(out, "{EMPTY_TITLE}\n{EMPTY_HINT}");
        return out;
    }

    let rows: Vec<[String; 5]> = entries
        .iter()
        .map(|entry| {
            [
                sanitize_cell(&entry.name),
                sanitize_cell(&entry.mailto_link()),
                sanitize_cell(&entry.occupation),
                entry.role.display_label().to_string(),
                sanitize_cell(&entry.signed_up_display()),
            ]
        })
        .collect();
    out.push_str(&render_table(&rows));
    out
}

fn render_table(rows: &[[String; 5]]) -> String {
    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS.map(String::from), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let _ = writeln!(out, "{}", rule.join("-+-"));
    for row in rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    let _ = writeln!(out, "{}", padded.join(" | ").trim_end());
}

#[derive(Serialize)]
struct JsonStats {
    #[serde(flatten)]
    counts: WaitlistStats,
    unclassified: usize,
}

#[derive(Serialize)]
struct JsonView<'a> {
    stats: JsonStats,
    entries: &'a [WaitlistEntry],
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

/// Machine-readable snapshot of the current state.
pub fn render_json(state: &FetchState) -> serde_json::Result<String> {
    let counts = state.stats();
    serde_json::to_string_pretty(&JsonView {
        stats: JsonStats {
            counts,
            unclassified: counts.unclassified(),
        },
        entries: state.entries(),
        error: state.error(),
    })
}
