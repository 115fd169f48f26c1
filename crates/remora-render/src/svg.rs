use crate::layout::{GraphLayout, NODE_RADIUS};
use remora_core::{Cause, LogKind, LogSequence};
use std::fmt::Write as _;

/// Fill for nodes produced by actions (warm highlight).
const ACTION_FILL: &str = "#ffff80";
/// Fill for state nodes (dark neutral).
const STATE_FILL: &str = "#151134";
const STROKE: &str = "gray";

fn node_fill(kind: LogKind) -> &'static str {
    match kind {
        LogKind::Action => ACTION_FILL,
        LogKind::State => STATE_FILL,
    }
}

pub(crate) fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Assembles the full SVG document: one circle + label per entry, then one
/// 3-point polyline per resolvable causal edge.
pub(crate) fn render_document(entries: &LogSequence, layout: &GraphLayout) -> String {
    let mut body = String::new();

    for (rank, entry) in entries.iter().enumerate() {
        let y = layout.node_y(rank);
        let _ = write!(
            &mut body,
            r#"<circle cx="{}" cy="{y}" r="{NODE_RADIUS}" fill="{}" />"#,
            layout.x,
            node_fill(entry.kind),
        );
        let _ = write!(
            &mut body,
            r#"<text x="{}" y="{}" font-size="{NODE_RADIUS}" fill="{STROKE}">{}</text>"#,
            layout.x + NODE_RADIUS * 3 / 2,
            y + NODE_RADIUS / 2,
            escape_xml(&entry.name),
        );
    }

    let mut skipped_absent = 0usize;
    let mut skipped_root = 0usize;
    let mut skipped_unresolved = 0usize;

    for (rank, entry) in entries.iter().enumerate() {
        // The first node never draws an incoming edge, cause or not.
        if rank == 0 {
            continue;
        }
        let cause_rank = match &entry.cause {
            None => {
                skipped_absent += 1;
                continue;
            }
            Some(Cause::Root) => {
                skipped_root += 1;
                continue;
            }
            Some(Cause::Entry(id)) => match entries.rank_of(id) {
                Some(cause_rank) => cause_rank,
                None => {
                    skipped_unresolved += 1;
                    continue;
                }
            },
        };

        let conn = layout.connector(cause_rank, rank);
        let _ = write!(
            &mut body,
            r#"<polyline points="{},{} {},{} {},{}" stroke="{STROKE}" fill="none" />"#,
            conn.line_x, conn.cause_y, conn.shift_x, conn.shift_y, conn.line_x, conn.idx_y,
        );
    }

    if skipped_absent + skipped_root + skipped_unresolved > 0 {
        tracing::debug!(
            absent = skipped_absent,
            root = skipped_root,
            unresolved = skipped_unresolved,
            "connectors skipped"
        );
    }

    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" style="font-family: monospace;">{body}</svg>"#,
        layout.width, layout.height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_in_labels() {
        assert_eq!(
            escape_xml(r#"a<b & "c" 'd'"#),
            "a&lt;b &amp; &quot;c&quot; &#39;d&#39;"
        );
    }
}
