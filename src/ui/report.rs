use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::models::file_entry::{FileEntry, FileKind};
use crate::ui::theme::{Role, Theme};

/// Names wider than this are clipped with a trailing ellipsis.
const NAME_MAX_WIDTH: usize = 50;
const TYPE_WIDTH: usize = 4;
const SIZE_WIDTH: usize = 7;
const SIZE_NUM_WIDTH: usize = 5;
const SIZE_UNIT_WIDTH: usize = 2;
const MARGIN: &str = "  ";
const GAP: &str = "  ";

const UNITS: [&str; 5] = ["B", "K", "M", "G", "T"];

/// Formats the report for an already filtered and sorted listing:
/// header, separator rule, one row per entry, count footer. A listing
/// with no entries renders the single `empty` line instead.
pub fn render_report(entries: &[FileEntry], theme: &Theme) -> String {
    let mut out = String::new();

    if entries.is_empty() {
        out.push_str(MARGIN);
        out.push_str(&theme.paint(Role::Count, "empty"));
        out.push('\n');
        return out;
    }

    let names: Vec<String> = entries
        .iter()
        .map(|e| truncate_name(&e.name, NAME_MAX_WIDTH))
        .collect();

    let name_width = names
        .iter()
        .map(|n| n.width())
        .max()
        .unwrap_or(0)
        .max("NAME".len());
    let ext_width = entries
        .iter()
        .map(|e| e.extension.width())
        .max()
        .unwrap_or(0)
        .max("EXT".len());

    out.push('\n');

    let header = [
        theme.paint(Role::Header, &pad("TYPE", TYPE_WIDTH)),
        theme.paint(Role::Header, &pad("NAME", name_width)),
        theme.paint(Role::Header, &pad("EXT", ext_width)),
        theme.paint(Role::Header, &pad_left("SIZE", SIZE_WIDTH)),
    ];
    out.push_str(MARGIN);
    out.push_str(&header.join(GAP));
    out.push('\n');

    let rule = [TYPE_WIDTH, name_width, ext_width, SIZE_WIDTH]
        .iter()
        .map(|w| theme.paint(Role::Separator, &"─".repeat(*w)))
        .collect::<Vec<_>>()
        .join(GAP);
    out.push_str(MARGIN);
    out.push_str(&rule);
    out.push('\n');

    let mut dirs = 0usize;
    let mut files = 0usize;

    for (entry, name) in entries.iter().zip(&names) {
        if entry.effective_dir {
            dirs += 1;
        } else {
            files += 1;
        }

        // The LINK tag wins over DIR/FILE; grouping still follows
        // effective directory-ness.
        let (tag_role, tag) = match (entry.kind, entry.effective_dir) {
            (FileKind::Link, _) => (Role::LinkTag, "LINK"),
            (_, true) => (Role::DirTag, "DIR"),
            (_, false) => (Role::FileTag, "FILE"),
        };

        let name_role = match (entry.kind, entry.hidden, entry.effective_dir) {
            (FileKind::Link, ..) => Role::LinkName,
            (_, true, _) => Role::HiddenName,
            (_, false, true) => Role::DirName,
            _ => Role::FileName,
        };

        let ext_cell = if entry.extension.is_empty() {
            theme.paint(Role::ExtDash, &pad("—", ext_width))
        } else {
            theme.paint(Role::Ext, &pad(&entry.extension, ext_width))
        };

        let size_cell = if entry.effective_dir {
            theme.paint(Role::SizeDash, &pad_left("—", SIZE_WIDTH))
        } else {
            let (num, unit) = human_size_parts(entry.size);
            format!(
                "{}{}",
                theme.paint(Role::SizeNum, &pad_left(&num, SIZE_NUM_WIDTH)),
                theme.paint(Role::SizeUnit, &pad_left(unit, SIZE_UNIT_WIDTH)),
            )
        };

        let row = [
            theme.paint(tag_role, &pad(tag, TYPE_WIDTH)),
            theme.paint(name_role, &pad(name, name_width)),
            ext_cell,
            size_cell,
        ];
        out.push_str(MARGIN);
        out.push_str(&row.join(GAP));
        out.push('\n');
    }

    out.push('\n');
    out.push_str(MARGIN);
    out.push_str(&theme.paint(Role::Count, &summarize(dirs, files)));
    out.push('\n');
    out.push('\n');
    out
}

/// Splits a byte count into a scaled number and the largest unit in
/// B/K/M/G/T whose scaled value is at least one. Values of ten or more
/// drop the decimal place.
pub fn human_size_parts(bytes: u64) -> (String, &'static str) {
    if bytes == 0 {
        return ("0".to_string(), "B");
    }

    let mut value = bytes as f64;
    let mut idx = 0;
    while value >= 1024.0 && idx < UNITS.len() - 1 {
        value /= 1024.0;
        idx += 1;
    }

    if idx == 0 {
        (bytes.to_string(), "B")
    } else if value >= 10.0 {
        (format!("{}", value as u64), UNITS[idx])
    } else {
        (format!("{value:.1}"), UNITS[idx])
    }
}

/// Clips a name to `max` display columns, replacing the overflow with
/// one ellipsis so it never widens its column.
fn truncate_name(name: &str, max: usize) -> String {
    if name.width() <= max {
        return name.to_string();
    }

    let mut clipped = String::new();
    let mut width = 0;
    for ch in name.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > max - 1 {
            break;
        }
        clipped.push(ch);
        width += w;
    }
    clipped.push('…');
    clipped
}

/// Left-justifies `s` to `width` display columns, padding with spaces on
/// the right. Strings already at least `width` wide are returned as-is.
fn pad(s: &str, width: usize) -> String {
    let w = s.width();
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

/// Right-justifies `s` to `width` display columns, padding with spaces on
/// the left. Strings already at least `width` wide are returned as-is.
fn pad_left(s: &str, width: usize) -> String {
    let w = s.width();
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - w), s)
    }
}

fn summarize(dirs: usize, files: usize) -> String {
    let mut parts = Vec::new();
    if dirs > 0 {
        parts.push(pluralize(dirs, "dir"));
    }
    if files > 0 {
        parts.push(pluralize(files, "file"));
    }
    parts.join(", ")
}

fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
