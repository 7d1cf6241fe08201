//! Client-side core of a task-management view: an owned in-memory task
//! collection plus the pure filter/sort/statistics pipeline that renders it.
//!
//! The surrounding shell (widgets, HTTP transport, real-time updates) lives
//! elsewhere; this crate is the part worth reusing and testing.

mod ai;
mod task_store;
mod types;
mod utils;
mod view;

pub use ai::forward_utterance;
pub use task_store::{BoardError, TaskBoard};
pub use types::{FilterSpec, Priority, SortMode, Status, Task, TaskInput, TaskPatch, TaskStats};
pub use utils::{format_offset, format_utc, now_iso, parse_deadline, parse_offsets};
pub use view::{build_view, task_stats};
