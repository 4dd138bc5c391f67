use crate::core::task::{Filter, Task};

#[derive(Debug, Clone)]
pub enum Message {
    // Entry form
    TitleInputChanged(String),
    Submit,
    CancelEdit,

    // Row interactions
    ToggleCompleted(u64),
    EditTask(u64),
    DeleteTask(u64),

    // Local view state
    SetFilter(Filter),
    ToggleDarkMode,

    // Request completions
    TasksFetched(Result<Vec<Task>, String>),
    TaskSaved(Result<Task, String>),
    TaskUpdated(Result<Task, String>),
    TaskDeleted(Result<(), String>),
}
