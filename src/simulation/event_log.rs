//! Event logging system for displaying recent simulation events.

use std::collections::VecDeque;

use super::geometry::Position;

/// A logged event for display in the UI.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggedEvent {
    /// Simulated time when the event occurred
    pub time: f32,
    /// What happened
    pub kind: EventKind,
}

/// Event categories, used for coloring in the UI
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventKind {
    /// An agent ate a food particle
    Eaten {
        /// Index of the agent
        agent: usize,
        /// Where the two touched
        position: Position,
    },
    /// Food particles ran out of life
    Expired {
        /// How many expired in the same frame
        count: usize,
    },
    /// An agent snapped onto the target
    Pinned {
        /// Index of the agent
        agent: usize,
        /// Target position it snapped to
        position: Position,
    },
}

impl std::fmt::Display for LoggedEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            EventKind::Eaten { agent, position } => write!(f, "agent {} ate at {}", agent, position),
            EventKind::Expired { count } => write!(f, "{} food expired", count),
            EventKind::Pinned { agent, position } => {
                write!(f, "agent {} reached target at {}", agent, position)
            }
        }
    }
}

/// Event log that tracks recent simulation events
#[derive(Debug, Clone)]
pub struct EventLog {
    /// Recent events, newest first
    events: VecDeque<LoggedEvent>,
    /// Maximum number of events to keep
    max_events: usize,
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new(20)
    }
}

impl EventLog {
    /// Creates a new event log with specified capacity
    pub fn new(max_events: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(max_events),
            max_events,
        }
    }

    /// Adds a new event to the log
    pub fn log(&mut self, time: f32, kind: EventKind) {
        self.events.push_front(LoggedEvent { time, kind });

        // Keep only the most recent events
        self.events.truncate(self.max_events);
    }

    /// Returns all events, newest first
    pub fn events(&self) -> &VecDeque<LoggedEvent> {
        &self.events
    }
}
