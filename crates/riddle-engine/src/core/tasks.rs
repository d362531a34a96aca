// core/tasks.rs
//
// Delayed one-shot flow transitions, tracked by handle.
// The controller schedules these instead of firing wall-clock timers, so a
// pending transition can always be cancelled before it comes due.

/// A delayed flow transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowTask {
    /// Advance to the next level (or the success screen) after the pacing
    /// delay that lets the player read the success feedback.
    AdvanceLevel,
    /// Clear the feedback line after it has been on screen long enough.
    ClearFeedback,
}

/// Handle to a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub u32);

#[derive(Debug, Clone)]
struct Scheduled {
    id: TaskId,
    remaining: f32,
    task: FlowTask,
}

/// Pending delayed transitions, owned by the flow controller.
///
/// `tick` advances every entry by elapsed seconds and returns the tasks that
/// came due, in schedule order. Entries never outlive a `cancel`/`clear`, so
/// a stale transition can never fire after the state it referred to is gone.
#[derive(Debug, Default)]
pub struct TaskQueue {
    entries: Vec<Scheduled>,
    next_id: u32,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `task` to fire after `delay` seconds. Returns a handle for
    /// later cancellation. A non-positive delay fires on the next tick.
    pub fn schedule(&mut self, task: FlowTask, delay: f32) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.entries.push(Scheduled {
            id,
            remaining: delay.max(0.0),
            task,
        });
        id
    }

    /// Cancel a task by handle. Returns whether it was still pending.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Cancel every pending task of the given kind. Returns how many were
    /// removed.
    pub fn cancel_kind(&mut self, task: FlowTask) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| e.task != task);
        before - self.entries.len()
    }

    /// Whether a task of the given kind is pending.
    pub fn contains_kind(&self, task: FlowTask) -> bool {
        self.entries.iter().any(|e| e.task == task)
    }

    /// Drop every pending task.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of pending tasks.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no tasks are pending.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Advance all pending tasks by `dt` seconds and collect the ones that
    /// fired, in schedule order.
    pub fn tick(&mut self, dt: f32) -> Vec<FlowTask> {
        for entry in &mut self.entries {
            entry.remaining -= dt;
        }
        let mut fired = Vec::new();
        let mut i = 0;
        while i < self.entries.len() {
            if self.entries[i].remaining <= 0.0 {
                fired.push(self.entries.remove(i).task);
            } else {
                i += 1;
            }
        }
        fired
    }
}
