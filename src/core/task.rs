use serde::{Deserialize, Serialize};

/// A to-do item as served by the backend.
///
/// The identifier is assigned by the server and treated as opaque; the
/// client never invents one. Extra fields the server includes (timestamps
/// and the like) are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

/// Client-side view predicate over the task collection. Purely local;
/// changing the filter never issues a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Completed,
    Pending,
}

impl Filter {
    pub const ALL: &'static [Filter] = &[Filter::All, Filter::Completed, Filter::Pending];

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Completed => task.completed,
            Self::Pending => !task.completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Task> {
        vec![
            Task { id: 1, title: "Buy milk".into(), completed: false },
            Task { id: 2, title: "Water plants".into(), completed: true },
            Task { id: 3, title: "File taxes".into(), completed: false },
            Task { id: 4, title: "Call dentist".into(), completed: true },
        ]
    }

    #[test]
    fn filter_all_keeps_every_task() {
        let tasks = sample();
        let visible: Vec<_> = tasks.iter().filter(|t| Filter::All.matches(t)).collect();
        assert_eq!(visible.len(), tasks.len());
    }

    #[test]
    fn filter_completed_is_exactly_the_completed_subset() {
        let tasks = sample();
        let visible: Vec<_> = tasks.iter().filter(|t| Filter::Completed.matches(t)).collect();
        assert!(visible.iter().all(|t| t.completed));
        assert_eq!(visible.len(), 2);
    }

    #[test]
    fn filter_pending_is_the_complement_of_completed() {
        let tasks = sample();
        let pending: Vec<_> = tasks.iter().filter(|t| Filter::Pending.matches(t)).collect();
        let completed: Vec<_> = tasks.iter().filter(|t| Filter::Completed.matches(t)).collect();
        assert!(pending.iter().all(|t| !t.completed));
        assert_eq!(pending.len() + completed.len(), tasks.len());
    }

    #[test]
    fn toggling_completion_twice_round_trips() {
        let mut task = Task { id: 7, title: "Sharpen pencils".into(), completed: false };
        let original = task.completed;
        task.completed = !task.completed;
        task.completed = !task.completed;
        assert_eq!(task.completed, original);
    }

    #[test]
    fn deserializes_server_records_with_extra_fields() {
        let json = r#"{"id": 12, "title": "Buy milk", "completed": false,
                       "created_at": "2026-08-01T10:00:00Z", "owner": null}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, 12);
        assert_eq!(task.title, "Buy milk");
        assert!(!task.completed);
    }
}
