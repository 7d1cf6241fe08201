//! The task view pipeline: filter, sort, and count over a task collection.
//!
//! Pure transformations; recomputed in full whenever the collection or the
//! active [`FilterSpec`] changes.

use crate::types::{FilterSpec, SortMode, Status, Task, TaskStats};
use crate::utils::parse_deadline;

/// Applies every active filter conjunctively, then the selected sort.
/// Sorts are stable, so equal keys keep their original relative order.
pub fn build_view(tasks: &[Task], filter: &FilterSpec) -> Vec<Task> {
    let mut out: Vec<Task> = tasks
        .iter()
        .filter(|task| matches_filter(task, filter))
        .cloned()
        .collect();

    match filter.sort {
        Some(SortMode::Deadline) => {
            // Undated and unparseable deadlines sort after all dated tasks.
            out.sort_by_cached_key(|task| deadline_key(task));
        }
        Some(SortMode::Title) => {
            out.sort_by_cached_key(|task| task.title.to_lowercase());
        }
        Some(SortMode::CreatedDesc) => out.reverse(),
        None => {}
    }
    out
}

/// Status counts over the full collection, regardless of active filters.
pub fn task_stats(tasks: &[Task]) -> TaskStats {
    let mut stats = TaskStats {
        total: tasks.len(),
        ..TaskStats::default()
    };
    for task in tasks {
        match task.status {
            Status::Pending => stats.pending += 1,
            Status::InProgress => stats.in_progress += 1,
            Status::Done => stats.done += 1,
        }
    }
    stats
}

fn matches_filter(task: &Task, filter: &FilterSpec) -> bool {
    if let Some(status) = filter.status {
        if task.status != status {
            return false;
        }
    }
    if let Some(priority) = filter.priority {
        if task.priority != priority {
            return false;
        }
    }
    if let Some(query) = &filter.query {
        let needle = query.trim().to_lowercase();
        if !needle.is_empty() {
            let haystack = format!(
                "{} {}",
                task.title,
                task.description.as_deref().unwrap_or("")
            )
            .to_lowercase();
            if !haystack.contains(&needle) {
                return false;
            }
        }
    }
    true
}

fn deadline_key(task: &Task) -> (bool, i64) {
    match task.deadline_utc.as_deref().and_then(parse_deadline) {
        Some(dt) => (false, dt.timestamp_millis()),
        None => (true, 0),
    }
}
