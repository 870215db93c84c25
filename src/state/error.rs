//! State management-specific error types.

/// Errors that can occur during state operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// Task text was empty after trimming
    #[error("Task text is empty")]
    EmptyTaskText,

    /// No task with the id is toggleable
    #[error("Task not found: {id}")]
    TaskNotFound { id: i64 },

    /// There is no current task to act on
    #[error("No current task")]
    NoCurrentTask,

    /// History is empty
    #[error("No completed task to reopen")]
    NoCompletedTask,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_error_display() {
        let error = StateError::EmptyTaskText;
        assert!(error.to_string().contains("empty"));

        let error = StateError::TaskNotFound { id: 1700000000000 };
        assert!(error.to_string().contains("Task not found"));
        assert!(error.to_string().contains("1700000000000"));

        let error = StateError::NoCurrentTask;
        assert!(error.to_string().contains("No current task"));

        let error = StateError::NoCompletedTask;
        assert!(error.to_string().contains("reopen"));
    }
}
