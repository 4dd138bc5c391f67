use cosmic::app::{Core, Task as CosmicTask};
use cosmic::{Application, Element, executor};

use crate::api::ApiClient;
use crate::config::TallyConfig;
use crate::core::task::{Filter, Task};
use crate::message::Message;
use crate::pages;

pub struct Tally {
    core: Core,
    config: TallyConfig,
    cosmic_config: cosmic::cosmic_config::Config,
    api: ApiClient,

    // Replaced wholesale by every successful fetch; the server is the
    // sole source of truth.
    tasks: Vec<Task>,

    // UI state
    title_input: String,
    editing: Option<Task>,
    filter: Filter,
    loading: bool,
    error: Option<String>,
}

pub struct Flags {
    pub config: TallyConfig,
    pub cosmic_config: cosmic::cosmic_config::Config,
}

/// Apply a fetch completion. A success replaces the whole list and clears
/// the error; a failure leaves the prior list untouched and sets the fetch
/// error string.
fn apply_fetch_result(
    tasks: &mut Vec<Task>,
    error: &mut Option<String>,
    result: Result<Vec<Task>, String>,
) {
    match result {
        Ok(list) => {
            log::debug!("Fetched {} tasks", list.len());
            *tasks = list;
            *error = None;
        }
        Err(e) => {
            log::warn!("Fetch failed: {}", e);
            *error = Some("Failed to fetch tasks".to_string());
        }
    }
}

/// Kick off a full list fetch; the completion lands as `TasksFetched`.
fn fetch_tasks(api: ApiClient) -> CosmicTask<Message> {
    CosmicTask::perform(
        async move { api.fetch_tasks().await.map_err(|e| e.to_string()) },
        |result| cosmic::Action::App(Message::TasksFetched(result)),
    )
}

impl Application for Tally {
    type Executor = executor::Default;
    type Flags = Flags;
    type Message = Message;

    const APP_ID: &'static str = "dev.tally.app";

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    fn init(core: Core, flags: Self::Flags) -> (Self, CosmicTask<Self::Message>) {
        let config = flags.config;
        let api = ApiClient::new(&config.api_base_url);

        let app = Self {
            core,
            api: api.clone(),
            config,
            cosmic_config: flags.cosmic_config,
            tasks: Vec::new(),
            title_input: String::new(),
            editing: None,
            filter: Filter::All,
            loading: true,
            error: None,
        };

        (app, fetch_tasks(api))
    }

    fn update(&mut self, message: Message) -> CosmicTask<Message> {
        match message {
            Message::TitleInputChanged(value) => {
                self.title_input = value;
            }

            Message::Submit => {
                self.loading = true;
                let api = self.api.clone();
                let title = self.title_input.clone();
                // An edit target switches the submit action from create to
                // a full-record update keeping the existing completed flag.
                return match self.editing.clone() {
                    Some(task) => CosmicTask::perform(
                        async move {
                            api.update_task(task.id, &title, task.completed)
                                .await
                                .map_err(|e| e.to_string())
                        },
                        |result| cosmic::Action::App(Message::TaskSaved(result)),
                    ),
                    None => CosmicTask::perform(
                        async move { api.create_task(&title).await.map_err(|e| e.to_string()) },
                        |result| cosmic::Action::App(Message::TaskSaved(result)),
                    ),
                };
            }

            Message::TaskSaved(result) => {
                self.loading = false;
                match result {
                    Ok(_) => {
                        self.editing = None;
                        self.title_input.clear();
                        return self.refetch();
                    }
                    Err(e) => {
                        log::warn!("Save failed: {}", e);
                        self.error = Some("Failed to save task".to_string());
                    }
                }
            }

            Message::CancelEdit => {
                self.editing = None;
                self.title_input.clear();
            }

            Message::EditTask(id) => {
                if let Some(task) = self.tasks.iter().find(|t| t.id == id) {
                    self.title_input = task.title.clone();
                    self.editing = Some(task.clone());
                }
            }

            Message::ToggleCompleted(id) => {
                if let Some(task) = self.tasks.iter().find(|t| t.id == id) {
                    let api = self.api.clone();
                    let title = task.title.clone();
                    let completed = !task.completed;
                    return CosmicTask::perform(
                        async move {
                            api.update_task(id, &title, completed)
                                .await
                                .map_err(|e| e.to_string())
                        },
                        |result| cosmic::Action::App(Message::TaskUpdated(result)),
                    );
                }
            }

            Message::TaskUpdated(result) => match result {
                Ok(_) => return self.refetch(),
                Err(e) => {
                    log::warn!("Update failed: {}", e);
                    self.error = Some("Failed to update task".to_string());
                }
            },

            Message::DeleteTask(id) => {
                let api = self.api.clone();
                return CosmicTask::perform(
                    async move { api.delete_task(id).await.map_err(|e| e.to_string()) },
                    |result| cosmic::Action::App(Message::TaskDeleted(result)),
                );
            }

            Message::TaskDeleted(result) => match result {
                Ok(()) => return self.refetch(),
                Err(e) => {
                    log::warn!("Delete failed: {}", e);
                    self.error = Some("Failed to delete task".to_string());
                }
            },

            Message::SetFilter(filter) => {
                self.filter = filter;
            }

            Message::ToggleDarkMode => {
                self.config.dark_mode = !self.config.dark_mode;
                self.save_config();
            }

            Message::TasksFetched(result) => {
                self.loading = false;
                apply_fetch_result(&mut self.tasks, &mut self.error, result);
            }
        }

        CosmicTask::none()
    }

    fn view(&self) -> Element<'_, Message> {
        pages::tasks::tasks_view(
            &self.tasks,
            &self.title_input,
            self.editing.is_some(),
            self.filter,
            self.loading,
            self.error.as_deref(),
            self.config.dark_mode,
        )
    }
}

impl Tally {
    /// Discard local state and re-fetch the full list after a mutation.
    fn refetch(&mut self) -> CosmicTask<Message> {
        self.loading = true;
        fetch_tasks(self.api.clone())
    }

    fn save_config(&self) {
        use cosmic::cosmic_config::CosmicConfigEntry;
        if let Err(e) = self.config.write_entry(&self.cosmic_config) {
            log::error!("Failed to save config: {:?}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prior_list() -> Vec<Task> {
        vec![
            Task { id: 1, title: "Buy milk".into(), completed: false },
            Task { id: 2, title: "Water plants".into(), completed: true },
        ]
    }

    #[test]
    fn failed_fetch_preserves_prior_list_and_sets_error() {
        let mut tasks = prior_list();
        let mut error = None;

        apply_fetch_result(&mut tasks, &mut error, Err("connection refused".into()));

        assert_eq!(tasks, prior_list());
        assert_eq!(error.as_deref(), Some("Failed to fetch tasks"));
    }

    #[test]
    fn successful_fetch_replaces_list_and_clears_error() {
        let mut tasks = prior_list();
        let mut error = Some("Failed to delete task".to_string());
        let fresh = vec![Task { id: 3, title: "File taxes".into(), completed: false }];

        apply_fetch_result(&mut tasks, &mut error, Ok(fresh.clone()));

        assert_eq!(tasks, fresh);
        assert_eq!(error, None);
    }
}
