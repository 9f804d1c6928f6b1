//! Core systems for Horizon Grid.
//!
//! This crate provides the reactive plumbing the grid widget is built on:
//!
//! - **Signal/Slot System**: Type-safe change notification
//! - **Property System**: Observable values with change detection
//! - **Task Queue**: Deferred "run on next UI tick" processing
//! - **Logging**: `tracing` targets shared by the workspace
//!
//! Everything here runs on the UI thread. Deferred work is never executed in
//! parallel; it is simply postponed until the owner drains the queue on its
//! next frame.
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_grid_core::Signal;
//!
//! let value_changed = Signal::<i32>::new();
//!
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! value_changed.emit(42);
//! value_changed.disconnect(conn_id);
//! ```
//!
//! # Property Example
//!
//! ```
//! use horizon_grid_core::{Property, Signal};
//!
//! struct Counter {
//!     value: Property<i32>,
//!     value_changed: Signal<i32>,
//! }
//!
//! impl Counter {
//!     fn increment(&self) {
//!         let new_value = self.value.get() + 1;
//!         if self.value.set(new_value) {
//!             self.value_changed.emit(new_value);
//!         }
//!     }
//! }
//! ```
//!
//! # Deferred Task Example
//!
//! ```
//! use horizon_grid_core::TaskQueue;
//!
//! let mut queue: TaskQueue<Vec<&'static str>> = TaskQueue::new();
//! queue.post(|log| log.push("after layout"));
//!
//! let mut log = Vec::new();
//! while let Some(task) = queue.pop() {
//!     task.run(&mut log);
//! }
//! assert_eq!(log, vec!["after layout"]);
//! ```

mod error;
pub mod logging;
pub mod property;
pub mod signal;
mod task;

pub use error::{SignalError, TaskError};
pub use logging::PerfSpan;
pub use property::{Property, ReadOnlyProperty};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
pub use task::{Task, TaskId, TaskQueue};
