//! Begrenztes Command-Log für Diagnose und Tests.

use super::AppCommand;

/// Ein ausgeführter Command mit dem Dispatch-Zyklus, in dem er lief.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandLogEntry {
    /// Dispatch-Zyklus (siehe `InteractionState::dispatch_cycle`)
    pub cycle: u64,
    /// Ausgeführter Command
    pub command: AppCommand,
}

/// Speichert ausgeführte Commands in Reihenfolge.
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: Vec<CommandLogEntry>,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;

    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Fügt einen ausgeführten Command hinzu.
    /// Begrenzt auf MAX_ENTRIES, die ältere Hälfte wird dann verworfen.
    pub fn record(&mut self, cycle: u64, command: &AppCommand) {
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.entries.push(CommandLogEntry {
            cycle,
            command: command.clone(),
        });
    }

    /// Gibt die Anzahl der geloggten Commands zurück.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Commands vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Liefert eine read-only Sicht auf alle Einträge.
    pub fn entries(&self) -> &[CommandLogEntry] {
        &self.entries
    }

    /// Zuletzt ausgeführter Command
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.last().map(|entry| &entry.command)
    }

    /// Commands eines Dispatch-Zyklus in Ausführungsreihenfolge
    pub fn commands_in_cycle(&self, cycle: u64) -> impl Iterator<Item = &AppCommand> {
        self.entries
            .iter()
            .filter(move |entry| entry.cycle == cycle)
            .map(|entry| &entry.command)
    }
}
