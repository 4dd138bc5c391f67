use cosmic::iced::{Alignment, Length};
use cosmic::widget::{button, checkbox, column, container, icon, row, text};
use cosmic::Element;

use crate::core::task::Task;
use crate::message::Message;

// Column widths for consistent alignment
const COL_CHECK: f32 = 28.0;
const COL_ACTIONS: f32 = 88.0;

/// Build rows for the visible tasks.
pub fn task_list<'a>(tasks: impl Iterator<Item = &'a Task>) -> Element<'static, Message> {
    let mut content = column().spacing(4).width(Length::Fill);
    for task in tasks {
        content = content.push(task_row(task));
    }
    content.into()
}

/// One task row: checkbox, title, edit and delete actions.
///
/// Stateless by design — rows never touch the network or hold state; they
/// only emit messages the shell wires to its own handlers.
fn task_row(task: &Task) -> Element<'static, Message> {
    let id = task.id;

    let check: Element<'static, Message> = container(
        checkbox("", task.completed).on_toggle(move |_| Message::ToggleCompleted(id)),
    )
    .width(Length::Fixed(COL_CHECK))
    .into();

    // Completed titles render as dimmed captions, the closest widget
    // analogue of the web client's strike-through.
    let title: Element<'static, Message> = if task.completed {
        container(text::caption(task.title.clone()))
            .width(Length::Fill)
            .into()
    } else {
        container(text::body(task.title.clone()))
            .width(Length::Fill)
            .into()
    };

    let actions: Element<'static, Message> = container(
        row()
            .spacing(4)
            .push(button::icon(icon::from_name("document-edit-symbolic")).on_press(Message::EditTask(id)))
            .push(button::icon(icon::from_name("edit-delete-symbolic")).on_press(Message::DeleteTask(id))),
    )
    .width(Length::Fixed(COL_ACTIONS))
    .into();

    row()
        .spacing(8)
        .align_y(Alignment::Center)
        .push(check)
        .push(title)
        .push(actions)
        .width(Length::Fill)
        .into()
}
