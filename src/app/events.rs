//! App-Intent und App-Command Events.
//!
//! Intents sind Eingaben aus UI/System ohne direkte Mutationslogik;
//! Commands sind die daraus abgeleiteten mutierenden Operationen.

use glam::Vec2;

/// Roh-Eingaben aus UI und System.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Klick auf die Zeichenfläche (Canvas-Koordinaten)
    CanvasClicked { pos: Vec2 },
    /// Zeigerbewegung über der Zeichenfläche
    PointerMoved { pos: Vec2 },
    /// Draft abschließen (Finish-Taste)
    FinishDraftRequested,
    /// Alle Kurven zwischen Curve- und Line-Modus umschalten
    ToggleModeRequested,
    /// Debug-Darstellung umschalten
    ToggleDebugRequested,
    /// Drag auf der Zeichenfläche begonnen
    HandleDragStarted { pos: Vec2 },
    /// Live-Position während eines Handle-Drags
    HandleDragMoved { pos: Vec2 },
    /// Handle-Drag beendet
    HandleDragEnded,
    /// Anwendung beenden
    ExitRequested,
}

/// Mutierende Operationen auf dem AppState.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Neuen Draft-Editor mit Start-Joint anlegen
    StartDraft { pos: Vec2 },
    /// Dauerhaften Punkt an den Draft anhängen
    AppendDraftPoint { pos: Vec2 },
    /// Vorschau-Schwanz des Drafts aktualisieren
    PreviewDraftPoint { pos: Vec2 },
    /// Draft abschließen (Editing oder Zerstörung)
    FinishDraft,
    /// Modus aller registrierten Editoren umschalten
    ToggleCurveMode,
    /// Debug-Darstellung umschalten (persistiert in den Optionen)
    ToggleDebugDraw,
    /// Handle-Drag beginnen (Pick über alle Editoren in der Edit-Phase)
    BeginHandleDrag { pos: Vec2 },
    /// Gegriffenes Handle nachziehen
    UpdateHandleDrag { pos: Vec2 },
    /// Handle-Drag beenden
    EndHandleDrag,
    /// Anwendung kontrolliert beenden
    RequestExit,
}
