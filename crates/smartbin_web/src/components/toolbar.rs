//! Page header with title and action buttons.

use smartbin_types::PageCommand;
use yew::prelude::*;

/// Properties for Toolbar component.
#[derive(Properties, PartialEq)]
pub struct ToolbarProps {
    pub title: String,
    /// Label of the primary button ("Ajouter", "Planifier", ...).
    pub add_label: String,
    #[prop_or_default]
    pub on_command: Option<Callback<PageCommand>>,
}

/// Page header with title and add/refresh buttons. The buttons emit
/// [`PageCommand`] values when a callback is supplied; pages currently
/// leave them unwired.
#[function_component(Toolbar)]
pub fn toolbar(props: &ToolbarProps) -> Html {
    let on_add = page_command(props.on_command.clone(), PageCommand::Add);
    let on_refresh = page_command(props.on_command.clone(), PageCommand::Refresh);

    html! {
        <div class="toolbar">
            <h1>{ &props.title }</h1>
            <div class="toolbar-actions">
                <button class="btn btn-primary" onclick={on_add}>
                    { &props.add_label }
                </button>
                <button class="btn btn-secondary" onclick={on_refresh}>
                    {"Actualiser"}
                </button>
            </div>
        </div>
    }
}

fn page_command(
    on_command: Option<Callback<PageCommand>>,
    command: PageCommand,
) -> Callback<MouseEvent> {
    Callback::from(move |_| {
        if let Some(callback) = &on_command {
            callback.emit(command);
        }
    })
}
