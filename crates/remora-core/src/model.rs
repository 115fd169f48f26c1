use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Discriminates what produced a log entry.
///
/// A closed variant (not a boolean flag) so renderers can match exhaustively
/// and further kinds can be added without touching unrelated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogKind {
    Action,
    State,
}

impl LogKind {
    pub fn is_action(self) -> bool {
        matches!(self, LogKind::Action)
    }
}

/// Identity of a log entry, unique within a sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntryId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for EntryId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A non-owning back-reference to what caused an entry.
///
/// `Root` is the designated "no real cause" sentinel; it is distinct from the
/// cause being absent altogether (`Option::<Cause>::None` on [`LogEntry`]).
/// An `Entry` reference is resolved by identity lookup against the sequence,
/// never by pointer traversal; it may legitimately point outside the
/// sequence, in which case the lookup reports "not found".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cause {
    Root,
    Entry(EntryId),
}

/// One causal log record, consumed read-only by the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: EntryId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cause: Option<Cause>,
    pub kind: LogKind,
    /// Display label; the producer guarantees this is non-empty.
    pub name: String,
}

impl LogEntry {
    pub fn new(id: impl Into<EntryId>, kind: LogKind, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            cause: None,
            kind,
            name: name.into(),
        }
    }

    pub fn caused_by(mut self, cause: impl Into<EntryId>) -> Self {
        self.cause = Some(Cause::Entry(cause.into()));
        self
    }

    pub fn caused_by_root(mut self) -> Self {
        self.cause = Some(Cause::Root);
        self
    }
}

/// An ordered collection of entries, deduplicated by identity.
///
/// Insertion order is causal/temporal order and doubles as the rendering
/// rank. The first occurrence of an identity wins; later duplicates are
/// dropped, matching the set semantics of the producing subsystem.
#[derive(Debug, Clone, Default)]
pub struct LogSequence {
    entries: Vec<LogEntry>,
    ranks: FxHashMap<EntryId, usize>,
}

impl LogSequence {
    pub fn new(entries: impl IntoIterator<Item = LogEntry>) -> Self {
        let mut seq = Self::default();
        for entry in entries {
            seq.push(entry);
        }
        seq
    }

    /// Appends an entry at the next rank; a duplicate identity is ignored.
    pub fn push(&mut self, entry: LogEntry) {
        if self.ranks.contains_key(&entry.id) {
            tracing::trace!(id = %entry.id, "duplicate log entry dropped");
            return;
        }
        self.ranks.insert(entry.id.clone(), self.entries.len());
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, rank: usize) -> Option<&LogEntry> {
        self.entries.get(rank)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LogEntry> {
        self.entries.iter()
    }

    /// Rank of the entry with the given identity, if it is in the sequence.
    pub fn rank_of(&self, id: &EntryId) -> Option<usize> {
        self.ranks.get(id).copied()
    }
}

impl FromIterator<LogEntry> for LogSequence {
    fn from_iter<I: IntoIterator<Item = LogEntry>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a LogSequence {
    type Item = &'a LogEntry;
    type IntoIter = std::slice::Iter<'a, LogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
