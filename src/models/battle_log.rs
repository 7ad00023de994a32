use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Category of a battle log line, used by the display layer to style it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogKind {
    Info,
    Commentary,
    Combat,
}

#[derive(Debug, Clone, Serialize)]
pub struct BattleLogEntry {
    pub id: Uuid,
    pub text: String,
    pub kind: LogKind,
    pub timestamp: DateTime<Utc>,
}

/// Append-only, chronologically ordered match transcript. Entries are
/// never edited or removed; the whole log is dropped when the session
/// returns to setup.
#[derive(Debug, Default)]
pub struct BattleLog {
    entries: Vec<BattleLogEntry>,
}

impl BattleLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, text: impl Into<String>, kind: LogKind) {
        self.entries.push(BattleLogEntry {
            id: Uuid::new_v4(),
            text: text.into(),
            kind,
            timestamp: Utc::now(),
        });
    }

    pub fn entries(&self) -> &[BattleLogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_keep_insertion_order_and_kind() {
        let mut log = BattleLog::new();
        log.push("boot", LogKind::Info);
        log.push("what a matchup", LogKind::Commentary);
        log.push(">> round taken", LogKind::Combat);

        let kinds: Vec<LogKind> = log.entries().iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![LogKind::Info, LogKind::Commentary, LogKind::Combat]
        );
        assert_eq!(log.entries()[0].text, "boot");
        assert!(log.entries()[0].timestamp <= log.entries()[2].timestamp);
    }

    #[test]
    fn entries_get_distinct_ids() {
        let mut log = BattleLog::new();
        log.push("a", LogKind::Info);
        log.push("b", LogKind::Info);
        assert_ne!(log.entries()[0].id, log.entries()[1].id);
    }
}
