//! Plain-text table rendering for list output

use leo_client::Pager;

/// Render rows as a fixed-width table
///
/// Column widths follow the widest cell per column. Headers and rows must
/// have the same arity; extra cells are dropped.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().take(widths.len()).enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let mut out = String::new();
    push_row(&mut out, headers.iter().map(ToString::to_string), &widths);
    push_row(
        &mut out,
        widths.iter().map(|w| "-".repeat(*w)),
        &widths,
    );
    for row in rows {
        push_row(&mut out, row.iter().cloned(), &widths);
    }
    out
}

fn push_row(out: &mut String, cells: impl Iterator<Item = String>, widths: &[usize]) {
    let rendered: Vec<String> = cells
        .zip(widths.iter().copied())
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect();
    out.push_str(rendered.join("  ").trim_end());
    out.push('\n');
}

/// One-line pagination footer: `Page 2 of 3 (25 total)`
#[must_use]
pub fn render_footer(pager: &Pager) -> String {
    match (pager.total_pages(), pager.total) {
        (Some(pages), Some(total)) => {
            format!("Page {} of {pages} ({total} total)", pager.page)
        }
        _ => {
            let more = if pager.has_next() { ", more available" } else { "" };
            format!("Page {} ({} shown{more})", pager.page, pager.items_on_page)
        }
    }
}

/// Render a boolean the way the dashboard tables do
#[must_use]
pub const fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
