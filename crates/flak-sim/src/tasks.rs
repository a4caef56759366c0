//! Deferred task queue: the engine's only scheduling primitive.
//!
//! Periodic behavior is a task that re-submits itself. Tasks due on the same
//! tick run in priority order (activation, then barrage, then bursts) and
//! then in submission order, so an activation decision is always settled
//! before any barrage work that depends on it.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use hecs::Entity;

/// Work item for a zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Task {
    /// Re-evaluate enable/disable for a zone.
    Activation { zone: Entity },
    /// Emit one barrage wave, then reschedule.
    Barrage { zone: Entity, epoch: u64 },
    /// Fire one burst at a layer altitude.
    Burst {
        zone: Entity,
        epoch: u64,
        layer_altitude: f64,
    },
}

impl Task {
    fn priority(&self) -> u8 {
        match self {
            Task::Activation { .. } => 0,
            Task::Barrage { .. } => 1,
            Task::Burst { .. } => 2,
        }
    }
}

#[derive(Debug, Clone)]
struct ScheduledTask {
    due_tick: u64,
    priority: u8,
    seq: u64,
    task: Task,
}

impl ScheduledTask {
    fn key(&self) -> (u64, u8, u64) {
        (self.due_tick, self.priority, self.seq)
    }
}

impl PartialEq for ScheduledTask {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for ScheduledTask {}

impl PartialOrd for ScheduledTask {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScheduledTask {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// Min-heap of tasks keyed by due tick.
#[derive(Debug, Default)]
pub struct TaskQueue {
    heap: BinaryHeap<Reverse<ScheduledTask>>,
    next_seq: u64,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit `task` to run at `due_tick`.
    pub fn schedule_at(&mut self, due_tick: u64, task: Task) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(ScheduledTask {
            due_tick,
            priority: task.priority(),
            seq,
            task,
        }));
    }

    /// Remove and return the next task due at or before `now`.
    pub fn pop_due(&mut self, now: u64) -> Option<Task> {
        if self.heap.peek()?.0.due_tick > now {
            return None;
        }
        self.heap.pop().map(|Reverse(scheduled)| scheduled.task)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of pending tasks matching `pred`.
    pub fn count(&self, pred: impl Fn(&Task) -> bool) -> usize {
        self.heap.iter().filter(|s| pred(&s.0.task)).count()
    }
}
