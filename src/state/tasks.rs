use super::StateError;
use chrono::{DateTime, Utc};
use fake::Dummy;
use log::*;
use serde::{Deserialize, Serialize};

/// Number of completed tasks kept in history.
///
pub const HISTORY_LIMIT: usize = 3;

/// Defines task data structure. The id is the creation time in epoch
/// milliseconds.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Task {
    pub fn new(text: &str, now: DateTime<Utc>) -> Self {
        Task {
            id: now.timestamp_millis(),
            text: text.to_owned(),
            completed: false,
            created_at: now,
        }
    }
}

/// Outcome of a successful toggle.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Toggle {
    /// The current task was completed and archived.
    Completed(Task),
    /// The most recent history entry was moved back into the current slot.
    Reopened(Task),
}

/// Holds at most one current task and the most recently completed tasks,
/// newest first.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskTracker {
    current: Option<Task>,
    history: Vec<Task>,
}

impl TaskTracker {
    /// Build a tracker from loaded values, enforcing the history limit.
    ///
    pub fn new(current: Option<Task>, mut history: Vec<Task>) -> Self {
        if history.len() > HISTORY_LIMIT {
            warn!(
                "Discarding {} completed tasks beyond the history limit.",
                history.len() - HISTORY_LIMIT
            );
            history.truncate(HISTORY_LIMIT);
        }
        TaskTracker { current, history }
    }

    pub fn current(&self) -> Option<&Task> {
        self.current.as_ref()
    }

    pub fn history(&self) -> &[Task] {
        &self.history
    }

    /// Start a new current task, replacing any existing one without asking.
    ///
    pub fn add_task(&mut self, text: &str, now: DateTime<Utc>) -> Result<&Task, StateError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(StateError::EmptyTaskText);
        }
        if let Some(previous) = self.current.take() {
            if !previous.completed {
                info!("Abandoning unfinished task '{}'.", previous.text);
            }
        }
        Ok(&*self.current.insert(Task::new(text, now)))
    }

    /// Toggle the task with `id`.
    ///
    /// The current task is completed: a copy goes to the front of history,
    /// history is trimmed to the limit and the current slot is cleared. The
    /// newest history entry can be toggled back while the slot is empty; it
    /// leaves history and becomes the incomplete current task again.
    ///
    pub fn toggle_task(&mut self, id: i64) -> Result<Toggle, StateError> {
        if self.current.as_ref().map(|t| t.id) == Some(id) {
            if let Some(mut task) = self.current.take() {
                task.completed = true;
                self.history.insert(0, task.clone());
                self.history.truncate(HISTORY_LIMIT);
                return Ok(Toggle::Completed(task));
            }
        }

        let reopenable = self.current.is_none()
            && self.history.first().map(|t| t.id) == Some(id);
        if reopenable {
            let mut task = self.history.remove(0);
            task.completed = false;
            self.current = Some(task.clone());
            return Ok(Toggle::Reopened(task));
        }

        Err(StateError::TaskNotFound { id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use fake::{Fake, Faker};

    fn at(seconds: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + seconds, 0).unwrap()
    }

    fn complete(tracker: &mut TaskTracker, text: &str, seconds: i64) -> Task {
        let id = tracker.add_task(text, at(seconds)).unwrap().id;
        match tracker.toggle_task(id).unwrap() {
            Toggle::Completed(task) => task,
            other => panic!("expected completion, got {:?}", other),
        }
    }

    #[test]
    fn add_task_sets_incomplete_current_task() {
        let mut tracker = TaskTracker::default();
        let task = tracker.add_task("Buy milk", at(0)).unwrap().clone();
        assert_eq!(task.text, "Buy milk");
        assert!(!task.completed);
        assert_eq!(task.id, at(0).timestamp_millis());
        assert_eq!(tracker.current(), Some(&task));
    }

    #[test]
    fn add_task_trims_and_rejects_blank_text() {
        let mut tracker = TaskTracker::default();
        assert!(matches!(
            tracker.add_task("   ", at(0)),
            Err(StateError::EmptyTaskText)
        ));
        assert_eq!(tracker.add_task("  Call mom ", at(0)).unwrap().text, "Call mom");
    }

    #[test]
    fn add_task_replaces_unfinished_task() {
        let mut tracker = TaskTracker::default();
        tracker.add_task("First", at(0)).unwrap();
        tracker.add_task("Second", at(1)).unwrap();
        assert_eq!(tracker.current().unwrap().text, "Second");
        assert!(tracker.history().is_empty());
    }

    #[test]
    fn completing_moves_copy_to_front_of_history() {
        let mut tracker = TaskTracker::default();
        let task = complete(&mut tracker, "Buy milk", 0);
        assert!(task.completed);
        assert_eq!(tracker.history(), &[task]);
        assert!(tracker.current().is_none());

        let second = complete(&mut tracker, "Walk dog", 1);
        assert_eq!(tracker.history().len(), 2);
        assert_eq!(tracker.history()[0], second);
    }

    #[test]
    fn fourth_completion_evicts_oldest() {
        let mut tracker = TaskTracker::default();
        let first = complete(&mut tracker, "one", 0);
        complete(&mut tracker, "two", 1);
        complete(&mut tracker, "three", 2);
        assert_eq!(tracker.history().len(), HISTORY_LIMIT);

        let fourth = complete(&mut tracker, "four", 3);
        assert_eq!(tracker.history().len(), HISTORY_LIMIT);
        assert_eq!(tracker.history()[0], fourth);
        assert!(!tracker.history().contains(&first));
        let texts: Vec<&str> = tracker.history().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["four", "three", "two"]);
    }

    #[test]
    fn toggle_with_unknown_id_is_rejected() {
        let mut tracker = TaskTracker::default();
        let id = tracker.add_task("Buy milk", at(0)).unwrap().id;
        assert!(matches!(
            tracker.toggle_task(id + 1),
            Err(StateError::TaskNotFound { .. })
        ));
        assert_eq!(tracker.current().unwrap().id, id);
    }

    #[test]
    fn reopening_retracts_history_entry() {
        let mut tracker = TaskTracker::default();
        complete(&mut tracker, "one", 0);
        let two = complete(&mut tracker, "two", 1);

        let toggle = tracker.toggle_task(two.id).unwrap();
        let reopened = match toggle {
            Toggle::Reopened(task) => task,
            other => panic!("expected reopen, got {:?}", other),
        };
        assert!(!reopened.completed);
        assert_eq!(tracker.current(), Some(&reopened));
        assert_eq!(tracker.history().len(), 1);
        assert_eq!(tracker.history()[0].text, "one");
    }

    #[test]
    fn reopening_requires_empty_slot_and_newest_entry() {
        let mut tracker = TaskTracker::default();
        let one = complete(&mut tracker, "one", 0);
        let two = complete(&mut tracker, "two", 1);

        assert!(tracker.toggle_task(one.id).is_err());

        tracker.add_task("three", at(2)).unwrap();
        assert!(tracker.toggle_task(two.id).is_err());
        assert_eq!(tracker.history().len(), 2);
    }

    #[test]
    fn new_truncates_loaded_history() {
        let history: Vec<Task> = (0..5).map(|_| Faker.fake()).collect();
        let tracker = TaskTracker::new(None, history.clone());
        assert_eq!(tracker.history(), &history[..HISTORY_LIMIT]);
    }

    #[test]
    fn task_serializes_with_all_fields() {
        let task = Task::new("Buy milk", at(0));
        let text = serde_json::to_string(&task).unwrap();
        let back: Task = serde_json::from_str(&text).unwrap();
        assert_eq!(back, task);
        assert!(text.contains("\"completed\":false"));
    }
}
