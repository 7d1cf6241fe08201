use crate::types::{FilterSpec, Status, Task, TaskInput, TaskPatch, TaskStats};
use crate::utils::now_iso;
use crate::view::{build_view, task_stats};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("task not found: {0}")]
    NotFound(i64),
    #[error("title cannot be empty")]
    EmptyTitle,
    #[error("duplicate task id: {0}")]
    DuplicateId(i64),
}

/// The in-memory task collection owned by the view layer.
///
/// All mutation goes through `&mut self` methods; the collection is
/// process-local state, reinitialized on each load.
#[derive(Debug, Default)]
pub struct TaskBoard {
    tasks: Vec<Task>,
    next_id: i64,
}

impl TaskBoard {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    /// Seeds the board from an existing collection, e.g. a future REST
    /// hydration payload. Ids must be unique; id generation continues past
    /// the highest seeded id.
    pub fn with_tasks(tasks: Vec<Task>) -> Result<Self, BoardError> {
        let mut seen = Vec::with_capacity(tasks.len());
        for task in &tasks {
            if seen.contains(&task.id) {
                return Err(BoardError::DuplicateId(task.id));
            }
            seen.push(task.id);
        }
        let next_id = tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        Ok(Self { tasks, next_id })
    }

    pub fn add_task(&mut self, input: TaskInput) -> Result<Task, BoardError> {
        let title = input.title.trim().to_string();
        if title.is_empty() {
            return Err(BoardError::EmptyTitle);
        }
        let now = now_iso();
        let task = Task {
            id: self.take_id(),
            title,
            description: input
                .description
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
            status: input.status.unwrap_or_default(),
            priority: input.priority.unwrap_or_default(),
            estimated_duration_minutes: input.estimated_duration_minutes,
            deadline_utc: input.deadline_utc,
            notify_offsets_minutes: input.notify_offsets_minutes,
            tags: normalize_tags(&input.tags),
            created_at: now.clone(),
            updated_at: now,
        };
        tracing::debug!(id = task.id, title = %task.title, "task added");
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Toolbar quick-add: title only, everything else defaulted.
    pub fn quick_add(&mut self, title: &str) -> Result<Task, BoardError> {
        self.add_task(TaskInput {
            title: title.to_string(),
            ..TaskInput::default()
        })
    }

    pub fn update_task(&mut self, id: i64, patch: TaskPatch) -> Result<Task, BoardError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(BoardError::NotFound(id))?;
        if let Some(title) = patch.title {
            let trimmed = title.trim();
            if trimmed.is_empty() {
                return Err(BoardError::EmptyTitle);
            }
            task.title = trimmed.to_string();
        }
        if let Some(description) = patch.description {
            let trimmed = description.trim().to_string();
            task.description = if trimmed.is_empty() { None } else { Some(trimmed) };
        }
        if let Some(status) = patch.status {
            task.status = status;
        }
        if let Some(priority) = patch.priority {
            task.priority = priority;
        }
        if let Some(duration) = patch.estimated_duration_minutes {
            task.estimated_duration_minutes = Some(duration);
        }
        if let Some(deadline) = patch.deadline_utc {
            task.deadline_utc = Some(deadline);
        }
        if let Some(offsets) = patch.notify_offsets_minutes {
            task.notify_offsets_minutes = offsets;
        }
        if let Some(tags) = patch.tags {
            task.tags = normalize_tags(&tags);
        }
        task.updated_at = now_iso();
        tracing::debug!(id, "task updated");
        Ok(task.clone())
    }

    /// Flips a task to `done`, or back to `pending` if already done.
    pub fn toggle_done(&mut self, id: i64) -> Result<Task, BoardError> {
        let next = match self.get(id).ok_or(BoardError::NotFound(id))?.status {
            Status::Done => Status::Pending,
            _ => Status::Done,
        };
        self.update_task(
            id,
            TaskPatch {
                status: Some(next),
                ..TaskPatch::default()
            },
        )
    }

    /// Ad-hoc scheduling in one patch: deadline, duration, notify offsets.
    pub fn set_schedule(
        &mut self,
        id: i64,
        deadline_utc: Option<String>,
        estimated_duration_minutes: Option<u32>,
        notify_offsets_minutes: Option<Vec<u32>>,
    ) -> Result<Task, BoardError> {
        self.update_task(
            id,
            TaskPatch {
                deadline_utc,
                estimated_duration_minutes,
                notify_offsets_minutes,
                ..TaskPatch::default()
            },
        )
    }

    pub fn delete_task(&mut self, id: i64) -> Result<Task, BoardError> {
        let index = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(BoardError::NotFound(id))?;
        tracing::debug!(id, "task deleted");
        Ok(self.tasks.remove(index))
    }

    pub fn get(&self, id: i64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// The filtered, ordered view of the current collection.
    pub fn view(&self, filter: &FilterSpec) -> Vec<Task> {
        build_view(&self.tasks, filter)
    }

    pub fn stats(&self) -> TaskStats {
        task_stats(&self.tasks)
    }

    fn take_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// Trims tags and drops empties and duplicates, keeping first occurrence.
fn normalize_tags(tags: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for tag in tags {
        let tag = tag.trim();
        if !tag.is_empty() && !out.iter().any(|seen| seen == tag) {
            out.push(tag.to_string());
        }
    }
    out
}
