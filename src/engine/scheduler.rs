//! Explicit one-shot task scheduling.
//!
//! The game has exactly three deferred actions: resolving a revealed pair,
//! announcing the win shortly after the final match, and clearing a
//! transient message. Rather than firing wall-clock timers, the engine
//! records `ScheduledTask`s keyed to the round that created them and the
//! caller drives time forward via `GameEngine::advance`.
//!
//! Keying tasks to a `RoundId` is what makes rapid restarts safe: starting
//! a new round cancels everything pending, and dispatch re-checks the id,
//! so a resolution scheduled against an old board can never touch a new one.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Identity of one round. Monotonically increasing within an engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoundId(u64);

impl RoundId {
    /// Create a round ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The id for the round after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for RoundId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Round({})", self.0)
    }
}

/// What a scheduled task does when it comes due.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskKind {
    /// Judge the two unresolved cards as match or mismatch.
    ResolvePair,
    /// Compute the completion bonus and emit the win notification.
    FinishRound,
    /// Clear the transient message area.
    ClearMessage,
}

/// A one-shot deferred action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledTask {
    /// The round that scheduled this task.
    pub round: RoundId,

    /// Scheduler time at which the task is due.
    pub due_at_ms: u64,

    /// What to do.
    pub kind: TaskKind,
}

/// Pending one-shot tasks over a caller-driven clock.
///
/// At most a handful of tasks are ever pending (one resolution, one finish,
/// one message clear), hence the inline `SmallVec`.
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    now_ms: u64,
    tasks: SmallVec<[ScheduledTask; 4]>,
}

impl Scheduler {
    /// Create a scheduler at time zero with nothing pending.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current scheduler time.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Number of pending tasks.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    /// Schedule a task `delay_ms` from now on behalf of `round`.
    pub fn schedule(&mut self, round: RoundId, delay_ms: u64, kind: TaskKind) {
        self.tasks.push(ScheduledTask {
            round,
            due_at_ms: self.now_ms + delay_ms,
            kind,
        });
    }

    /// Cancel pending tasks of one kind for one round.
    pub fn cancel(&mut self, round: RoundId, kind: TaskKind) {
        self.tasks.retain(|t| !(t.round == round && t.kind == kind));
    }

    /// Cancel everything pending.
    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    /// Move time forward. Tasks that came due are handed out one at a
    /// time by `pop_due`.
    pub fn tick(&mut self, elapsed_ms: u64) {
        self.now_ms += elapsed_ms;
    }

    /// Remove and return the earliest due task, if any. Ties keep
    /// scheduling order.
    ///
    /// Dispatch must pop one task at a time: a running task may cancel
    /// others (a win drops the pending message clear), and the
    /// cancellation has to cover tasks that came due in the same clock
    /// step.
    pub fn pop_due(&mut self) -> Option<ScheduledTask> {
        let now = self.now_ms;
        let mut best: Option<usize> = None;

        for (i, task) in self.tasks.iter().enumerate() {
            let earlier = match best {
                Some(b) => task.due_at_ms < self.tasks[b].due_at_ms,
                None => true,
            };
            if task.due_at_ms <= now && earlier {
                best = Some(i);
            }
        }

        best.map(|i| self.tasks.remove(i))
    }
}
