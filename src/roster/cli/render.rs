//! # Rendering
//!
//! Turns command results into terminal text. Layout math (column widths,
//! truncation, padding) is Unicode-aware via `unicode-width`; styling goes
//! through `colored`, which honours `NO_COLOR` and non-terminal output.

use colored::{ColoredString, Colorize};
use roster::api::{CmdMessage, MessageLevel};
use roster::index::DisplayRecord;
use roster::model::{RecordField, Status};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Widest any single column may get before its values are truncated.
pub const MAX_COLUMN_WIDTH: usize = 28;
const COLUMN_GAP: &str = "  ";
const POSITION_TITLE: &str = "#";
const FULL_SEPARATOR: &str = "--------------------------------";

pub fn render_record_table(records: &[DisplayRecord]) -> String {
    if records.is_empty() {
        return format!("{}\n", "No records found.".dimmed());
    }

    let positions: Vec<String> = records.iter().map(|dr| dr.position.to_string()).collect();
    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|dr| RecordField::ALL.iter().map(|f| f.value(&dr.record)).collect())
        .collect();

    let pos_width = positions
        .iter()
        .map(|p| p.width())
        .chain(std::iter::once(POSITION_TITLE.width()))
        .max()
        .unwrap_or(1);
    let widths: Vec<usize> = RecordField::ALL
        .iter()
        .enumerate()
        .map(|(col, field)| {
            rows.iter()
                .map(|row| row[col].width())
                .chain(std::iter::once(field.title().width()))
                .max()
                .unwrap_or(0)
                .min(MAX_COLUMN_WIDTH)
        })
        .collect();

    let mut out = String::new();

    let mut header = vec![pad_right(POSITION_TITLE, pos_width).bold().to_string()];
    for (field, width) in RecordField::ALL.iter().zip(&widths) {
        header.push(pad_right(field.title(), *width).bold().to_string());
    }
    push_line(&mut out, &header);

    for ((dr, pos), row) in records.iter().zip(&positions).zip(&rows) {
        let mut cells = vec![pad_left(pos, pos_width).yellow().to_string()];
        for ((field, value), width) in RecordField::ALL.iter().zip(row).zip(&widths) {
            let cell = pad_right(&truncate_to_width(value, *width), *width);
            let styled = match field {
                RecordField::Status => status_style(dr.record.status, cell),
                RecordField::Id => cell.bold(),
                _ => cell.normal(),
            };
            cells.push(styled.to_string());
        }
        push_line(&mut out, &cells);
    }

    out
}

/// Every field of each record, one `Label: value` line per field.
pub fn render_full_records(records: &[DisplayRecord]) -> String {
    let label_width = RecordField::ALL
        .iter()
        .map(|f| f.title().width())
        .max()
        .unwrap_or(0)
        + 1;

    let mut out = String::new();
    for (i, dr) in records.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!(
            "{} {}\n",
            format!("{}.", dr.position).yellow(),
            dr.record.name.bold()
        ));
        out.push_str(FULL_SEPARATOR);
        out.push('\n');
        for field in RecordField::ALL {
            let label = pad_right(&format!("{}:", field.title()), label_width);
            let value = field.value(&dr.record);
            let value = match field {
                RecordField::Status => status_style(dr.record.status, value),
                _ => value.normal(),
            };
            out.push_str(&format!("{} {}\n", label.dimmed(), value));
        }
    }
    out
}

pub fn render_text_list(lines: &[String], empty_message: &str) -> String {
    if lines.is_empty() {
        return format!("{}\n", empty_message.dimmed());
    }
    lines.iter().map(|l| format!("{}\n", l)).collect()
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|message| {
            let styled = match message.level {
                MessageLevel::Info => message.content.dimmed(),
                MessageLevel::Success => message.content.green(),
                MessageLevel::Warning => message.content.yellow(),
            };
            format!("{}\n", styled)
        })
        .collect()
}

pub fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        print!("{}", output);
    }
}

fn status_style(status: Status, text: impl Into<String>) -> ColoredString {
    let text = text.into();
    match status {
        Status::Active => text.green(),
        Status::Inactive => text.dimmed(),
        Status::OnLeave => text.yellow(),
        Status::Terminated => text.red(),
    }
}

fn push_line(out: &mut String, cells: &[String]) {
    let line = cells.join(COLUMN_GAP);
    out.push_str(line.trim_end());
    out.push('\n');
}

fn pad_right(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(s.width())))
}

fn pad_left(s: &str, width: usize) -> String {
    format!("{}{}", " ".repeat(width.saturating_sub(s.width())), s)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
