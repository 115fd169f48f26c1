use remora_core::{Cause, LogEntry, LogSequence};

/// Node circle radius in pixels.
pub const NODE_RADIUS: i64 = 10;
/// Horizontal gap unit.
pub const X_GAP: i64 = NODE_RADIUS * 2;
/// Vertical distance between consecutive node centers.
pub const Y_GAP: i64 = NODE_RADIUS * 3;
/// Scale applied to the signed rank-distance fraction of a connector bulge.
pub const SHIFT_RATIO: i64 = 10 * X_GAP;

/// Single-column layout parameters shared by every node and connector.
///
/// All nodes sit on one vertical column at `x`; `max_shift` only reserves
/// enough canvas width for the widest connector bulge to the left of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphLayout {
    pub max_shift: i64,
    pub x: i64,
    pub width: i64,
    pub height: i64,
    entry_count: usize,
}

/// Three-point connector between a cause node and its effect node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connector {
    pub line_x: i64,
    pub cause_y: i64,
    pub shift_x: i64,
    pub shift_y: i64,
    pub idx_y: i64,
}

/// Rank of the entry's cause for shift purposes: an absent cause, the root
/// sentinel, and a cause not found in the sequence all collapse to the
/// entry's own rank (zero distance).
fn cause_rank_or_self(entries: &LogSequence, entry: &LogEntry, rank: usize) -> usize {
    match &entry.cause {
        Some(Cause::Entry(id)) => entries.rank_of(id).unwrap_or(rank),
        Some(Cause::Root) | None => rank,
    }
}

impl GraphLayout {
    pub fn compute(entries: &LogSequence) -> Self {
        let entry_count = entries.len();

        let max_distance = entries
            .iter()
            .enumerate()
            .map(|(rank, entry)| rank.saturating_sub(cause_rank_or_self(entries, entry, rank)))
            .max()
            .unwrap_or(0);

        // Division is undefined for an empty sequence; no entries means no
        // shift term contributes.
        let max_shift = if entry_count == 0 {
            0
        } else {
            ((max_distance as f64 / entry_count as f64) * SHIFT_RATIO as f64 / 2.0).floor() as i64
        };

        let x = max_shift + X_GAP;

        let width = entries
            .iter()
            .map(|entry| x + label_extent(&entry.name))
            .fold(x, i64::max);
        let height = (entry_count as i64 + 1) * Y_GAP;

        Self {
            max_shift,
            x,
            width,
            height,
            entry_count,
        }
    }

    /// Vertical center of the node at the given rank.
    pub fn node_y(&self, rank: usize) -> i64 {
        (rank as i64 + 1) * Y_GAP
    }

    /// Geometry of the connector from the node at `cause_rank` to the node
    /// at `rank`. The midpoint bulges left of the column by an amount that
    /// grows with the rank distance and shrinks with the total entry count,
    /// keeping nearby causal pairs visually separated without letting
    /// long-range edges overflow the reserved width.
    pub fn connector(&self, cause_rank: usize, rank: usize) -> Connector {
        let cause_y = self.node_y(cause_rank);
        let idx_y = self.node_y(rank);

        let distance = rank as f64 - cause_rank as f64;
        let shift = distance / self.entry_count as f64;
        let shift_x =
            (self.x as f64 - shift * SHIFT_RATIO as f64 - X_GAP as f64 / 2.0).floor() as i64;
        let shift_y =
            ((cause_rank as f64 + distance / 2.0) * Y_GAP as f64).floor() as i64 + Y_GAP;
        let line_x = self.x - X_GAP / 2;

        Connector {
            line_x,
            cause_y,
            shift_x,
            shift_y,
            idx_y,
        }
    }
}

/// Horizontal room a label claims to the right of the column.
fn label_extent(name: &str) -> i64 {
    name.chars().count() as i64 * NODE_RADIUS / 2 + X_GAP
}
