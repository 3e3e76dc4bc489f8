// Render relation tables and summaries as ASCII tables.
// Every renderer returns the text instead of printing so callers decide where it goes.

use crate::registry::ModeSummary;
use crate::relation::RelationTable;

const MAX_COL_WIDTH: usize = 80; // cap to keep output readable

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

struct Column<'a> {
    title: &'a str,
    align: Align,
}

const fn col(title: &str, align: Align) -> Column<'_> { Column { title, align } }

/// Two columns: entity and its related names joined by ", ".
pub fn render_table(table: &RelationTable) -> String {
    let rows: Vec<Vec<String>> = table
        .iter()
        .map(|(entity, related)| vec![entity.to_string(), related.join(", ")])
        .collect();
    render_grid(
        &[col("entity", Align::Left), col("related", Align::Left)],
        &rows,
        &format!("entities: {}, links: {}", table.len(), table.link_count()),
    )
}

/// One row per related name, in stored order.
pub fn render_entity(entity: &str, related: &[String]) -> String {
    let rows: Vec<Vec<String>> = related
        .iter()
        .enumerate()
        .map(|(i, r)| vec![(i + 1).to_string(), r.clone()])
        .collect();
    render_grid(
        &[col("#", Align::Right), col(entity, Align::Left)],
        &rows,
        &format!("related: {}", related.len()),
    )
}

pub fn render_summary(summary: &[ModeSummary]) -> String {
    let rows: Vec<Vec<String>> = summary
        .iter()
        .map(|s| vec![s.mode.to_string(), s.entities.to_string(), s.links.to_string()])
        .collect();
    render_grid(
        &[col("mode", Align::Left), col("entities", Align::Right), col("links", Align::Right)],
        &rows,
        &format!("modes: {}", summary.len()),
    )
}

fn render_grid(cols: &[Column<'_>], rows: &[Vec<String>], footer: &str) -> String {
    let widths: Vec<usize> = cols
        .iter()
        .enumerate()
        .map(|(i, c)| {
            rows.iter()
                .filter_map(|r| r.get(i))
                .map(|cell| cell.chars().count())
                .fold(c.title.chars().count(), usize::max)
                .min(MAX_COL_WIDTH)
        })
        .collect();

    let rule = format!("+{}+", widths.iter().map(|w| "-".repeat(w + 2)).collect::<Vec<_>>().join("+"));

    let mut out = vec![rule.clone()];
    // Headers are always left-aligned; alignment applies to data cells.
    out.push(grid_line(cols.iter().map(|c| (c.title, Align::Left)), &widths));
    out.push(rule.clone());
    for r in rows {
        let cells = cols.iter().enumerate().map(|(i, c)| (r.get(i).map(String::as_str).unwrap_or(""), c.align));
        out.push(grid_line(cells, &widths));
    }
    out.push(rule);
    out.push(footer.to_string());
    out.join("\n")
}

fn grid_line<'a>(cells: impl Iterator<Item = (&'a str, Align)>, widths: &[usize]) -> String {
    let inner: Vec<String> = cells.zip(widths).map(|((text, align), w)| fit(text, *w, align)).collect();
    format!("| {} |", inner.join(" | "))
}

/// Clip `text` to `width` chars (marking the cut with an ellipsis), then pad.
fn fit(text: &str, width: usize, align: Align) -> String {
    let len = text.chars().count();
    let clipped: String = if len <= width {
        text.to_string()
    } else if width <= 1 {
        "…".to_string()
    } else {
        text.chars().take(width - 1).chain(std::iter::once('…')).collect()
    };
    match align {
        Align::Left => format!("{:<width$}", clipped, width = width),
        Align::Right => format!("{:>width$}", clipped, width = width),
    }
}
