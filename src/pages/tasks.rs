use cosmic::iced::{Alignment, Length};
use cosmic::widget::{button, column, container, row, scrollable, text, text_input};
use cosmic::{Element, theme};

use crate::components::task_row::task_list;
use crate::core::task::{Filter, Task};
use crate::fl;
use crate::message::Message;

fn filter_label(filter: Filter) -> String {
    match filter {
        Filter::All => fl!("filter-all"),
        Filter::Completed => fl!("filter-completed"),
        Filter::Pending => fl!("filter-pending"),
    }
}

pub fn tasks_view<'a>(
    tasks: &[Task],
    title_input: &str,
    editing: bool,
    filter: Filter,
    loading: bool,
    error: Option<&str>,
    dark_mode: bool,
) -> Element<'a, Message> {
    let theme_label = if dark_mode { fl!("light-mode") } else { fl!("dark-mode") };
    let header = row()
        .spacing(8)
        .align_y(Alignment::Center)
        .push(text::title2(fl!("app-title")).width(Length::Fill))
        .push(button::standard(theme_label).on_press(Message::ToggleDarkMode));

    // Entry form: input + submit, disabled while a request is in flight,
    // plus a cancel button only while editing.
    let mut input = text_input::text_input(fl!("task-placeholder"), title_input.to_string())
        .width(Length::Fill);
    if !loading {
        input = input
            .on_input(Message::TitleInputChanged)
            .on_submit(|_| Message::Submit);
    }

    let submit_label = if editing { fl!("update-task") } else { fl!("add-task") };
    let mut submit = button::suggested(submit_label);
    if !loading {
        submit = submit.on_press(Message::Submit);
    }

    let mut form = row()
        .spacing(8)
        .align_y(Alignment::Center)
        .push(input)
        .push(submit);
    if editing {
        form = form.push(button::standard(fl!("cancel")).on_press(Message::CancelEdit));
    }

    // Filter buttons, active one highlighted
    let mut filters = row().spacing(8);
    for f in Filter::ALL {
        let label = filter_label(*f);
        filters = filters.push(if *f == filter {
            button::suggested(label).on_press(Message::SetFilter(*f))
        } else {
            button::standard(label).on_press(Message::SetFilter(*f))
        });
    }

    let mut content = column()
        .spacing(12)
        .width(Length::Fill)
        .push(header)
        .push(form)
        .push(filters);

    if loading {
        content = content.push(text::caption(fl!("loading")));
    }

    if let Some(error) = error {
        content = content.push(text::body(format!("✗ {}", error)));
    }

    let visible: Vec<&Task> = tasks.iter().filter(|t| filter.matches(t)).collect();
    if visible.is_empty() && !loading {
        content = content.push(
            container(text::body(fl!("tasks-empty")))
                .padding(32)
                .center_x(Length::Fill),
        );
    } else {
        content = content.push(task_list(visible.into_iter()));
    }

    let mut root = container(scrollable(content.padding(16).width(Length::Fill)))
        .width(Length::Fill)
        .height(Length::Fill);

    // Dark mode is a styling flag on the root container, mirroring the
    // persisted theme preference.
    if dark_mode {
        root = root.class(theme::Container::custom(|_| {
            cosmic::iced_widget::container::Style {
                background: Some(cosmic::iced::Background::Color(
                    cosmic::iced::Color::from_rgb(0.10, 0.10, 0.12),
                )),
                text_color: Some(cosmic::iced::Color::from_rgb(0.92, 0.92, 0.94)),
                ..Default::default()
            }
        }));
    }

    root.into()
}
