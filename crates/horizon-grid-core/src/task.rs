//! Deferred task queue.
//!
//! Tasks are closures that receive mutable access to the queue's owner
//! (`C`) when they run. The owner drains the queue once per UI frame, which
//! gives "run on next tick" semantics without nested callback chains: a task
//! that posts another task never sees it run within the same frame.

use std::collections::VecDeque;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::TaskError;
use crate::logging::targets;

/// A unique identifier for a deferred task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

impl TaskId {
    /// Get the raw u64 value of this task ID.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

static NEXT_TASK_ID: AtomicU64 = AtomicU64::new(1);

fn next_task_id() -> TaskId {
    TaskId(NEXT_TASK_ID.fetch_add(1, Ordering::Relaxed))
}

/// A deferred unit of work, run against the queue's owner.
pub struct Task<C> {
    id: TaskId,
    label: &'static str,
    run: Box<dyn FnOnce(&mut C)>,
}

impl<C> Task<C> {
    /// The task's ID.
    pub fn id(&self) -> TaskId {
        self.id
    }

    /// A short static description used for tracing.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Consume the task, running it against `ctx`.
    pub fn run(self, ctx: &mut C) {
        tracing::trace!(target: targets::TASK, id = self.id.0, label = self.label, "running deferred task");
        (self.run)(ctx);
    }
}

impl<C> fmt::Debug for Task<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Task")
            .field("id", &self.id)
            .field("label", &self.label)
            .finish()
    }
}

/// Manages the deferred task queue for an owner of type `C`.
pub struct TaskQueue<C> {
    tasks: VecDeque<Task<C>>,
}

impl<C> TaskQueue<C> {
    /// Create a new, empty task queue.
    pub fn new() -> Self {
        Self {
            tasks: VecDeque::new(),
        }
    }

    /// Post a task to run on the owner's next tick.
    ///
    /// Returns the task ID that can be used to cancel the task.
    pub fn post<F>(&mut self, task: F) -> TaskId
    where
        F: FnOnce(&mut C) + 'static,
    {
        self.post_labeled("task", task)
    }

    /// Post a task with a static label for tracing.
    pub fn post_labeled<F>(&mut self, label: &'static str, task: F) -> TaskId
    where
        F: FnOnce(&mut C) + 'static,
    {
        let id = next_task_id();
        tracing::trace!(target: targets::TASK, id = id.0, label, "posting deferred task");
        self.tasks.push_back(Task {
            id,
            label,
            run: Box::new(task),
        });
        id
    }

    /// Cancel a pending task.
    pub fn cancel(&mut self, id: TaskId) -> Result<(), TaskError> {
        let pos = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(TaskError::InvalidTaskId)?;
        self.tasks.remove(pos);
        Ok(())
    }

    /// Remove the oldest pending task.
    pub fn pop(&mut self) -> Option<Task<C>> {
        self.tasks.pop_front()
    }

    /// Get the number of pending tasks.
    pub fn pending_count(&self) -> usize {
        self.tasks.len()
    }
}

impl<C> Default for TaskQueue<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for TaskQueue<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskQueue")
            .field("pending", &self.tasks.len())
            .finish()
    }
}
