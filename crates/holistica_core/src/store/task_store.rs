//! Academic task store.
//!
//! # Responsibility
//! - Own the ordered task collection for the tasks page.
//! - Assign identifiers from a monotonic counter held beside the collection.
//!
//! # Invariants
//! - Identifiers are never reused and never derived from collection length.
//! - `add_task` appends at the end; insertion order is the display order.
//! - Toggling an unknown identifier leaves the collection untouched.

use crate::model::task::{Priority, Task, TaskDraft, TaskDraftError, TaskId};
use log::{debug, info};

/// Pure update: returns a copy of `tasks` with the matching task's completion
/// flag flipped, or `None` when no task matches.
fn toggled(tasks: &[Task], id: TaskId) -> Option<Vec<Task>> {
    if !tasks.iter().any(|task| task.id == id) {
        return None;
    }
    Some(
        tasks
            .iter()
            .map(|task| {
                if task.id == id {
                    let mut flipped = task.clone();
                    flipped.completed = !task.completed;
                    flipped
                } else {
                    task.clone()
                }
            })
            .collect(),
    )
}

/// Pure update: returns a copy of `tasks` with one new task appended.
fn appended(tasks: &[Task], task: Task) -> Vec<Task> {
    let mut next = tasks.to_vec();
    next.push(task);
    next
}

/// State holder for the tasks page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: TaskId,
}

impl TaskStore {
    /// Creates an empty store. The first assigned identifier is 1.
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    /// Creates the store preloaded with the product fixture tasks.
    pub fn seed() -> Self {
        let tasks = vec![
            Task {
                id: 1,
                title: "Ensayo de Filosofía".to_string(),
                description: "Redactar ensayo sobre ética kantiana".to_string(),
                subject: "Filosofía".to_string(),
                due_date: "2025-07-08".to_string(),
                priority: Priority::High,
                completed: false,
            },
            Task {
                id: 2,
                title: "Proyecto Final Programación".to_string(),
                description: "Desarrollo de aplicación web con React".to_string(),
                subject: "Programación".to_string(),
                due_date: "2025-07-15".to_string(),
                priority: Priority::High,
                completed: false,
            },
            Task {
                id: 3,
                title: "Examen Matemáticas".to_string(),
                description: "Estudiar cálculo diferencial e integral".to_string(),
                subject: "Matemáticas".to_string(),
                due_date: "2025-07-10".to_string(),
                priority: Priority::Medium,
                completed: false,
            },
            Task {
                id: 4,
                title: "Presentación Historia".to_string(),
                description: "Presentar sobre la Revolución Industrial".to_string(),
                subject: "Historia".to_string(),
                due_date: "2025-07-12".to_string(),
                priority: Priority::Low,
                completed: true,
            },
        ];
        let next_id = tasks.len() as TaskId + 1;
        Self { tasks, next_id }
    }

    /// Validates the draft and appends one new, not-completed task.
    ///
    /// # Contract
    /// - Assigns the next counter identifier and bumps the counter.
    /// - Returns the assigned identifier.
    ///
    /// # Errors
    /// - Returns `TaskDraftError` when the draft fails validation; the
    ///   collection is unchanged in that case.
    pub fn add_task(&mut self, draft: TaskDraft) -> Result<TaskId, TaskDraftError> {
        draft.validate()?;

        let id = self.next_id;
        let task = Task {
            id,
            title: draft.title,
            description: draft.description,
            subject: draft.subject,
            due_date: draft.due_date,
            priority: draft.priority,
            completed: false,
        };
        self.tasks = appended(&self.tasks, task);
        self.next_id += 1;

        info!(
            "event=task_added module=task_store status=ok task_id={} total={}",
            id,
            self.tasks.len()
        );
        Ok(id)
    }

    /// Flips the completion flag of the matching task.
    ///
    /// Returns `true` when a task was toggled, `false` for an unknown
    /// identifier (silent no-op).
    pub fn toggle_completion(&mut self, id: TaskId) -> bool {
        match toggled(&self.tasks, id) {
            Some(next) => {
                self.tasks = next;
                info!("event=task_toggled module=task_store status=ok task_id={id}");
                true
            }
            None => {
                debug!("event=task_toggled module=task_store status=noop task_id={id}");
                false
            }
        }
    }

    /// Full ordered collection.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Tasks not yet completed, in insertion order.
    pub fn pending(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|task| !task.completed).collect()
    }

    /// Completed tasks, in insertion order.
    pub fn completed(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|task| task.completed).collect()
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::TaskStore;

    #[test]
    fn seed_matches_product_fixture() {
        let store = TaskStore::seed();
        assert_eq!(store.tasks().len(), 4);
        assert_eq!(store.pending().len(), 3);
        assert_eq!(store.completed().len(), 1);
        assert_eq!(store.completed()[0].title, "Presentación Historia");
    }
}
