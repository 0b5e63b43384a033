//! Generic data table component.
//!
//! Renders a [`TableModel`] as one `<tr>` per row, keyed by the row
//! key, in input order. The trailing actions column emits
//! [`RowCommand`] values through the optional `on_command` callback;
//! without one the buttons render but do nothing.

use smartbin_types::{Cell, Row, RowCommand, TableModel};
use yew::prelude::*;

/// Properties for DataTable component.
#[derive(Properties, PartialEq)]
pub struct DataTableProps {
    pub model: TableModel,
    #[prop_or_default]
    pub on_command: Option<Callback<RowCommand>>,
}

/// Generic data table component.
#[function_component(DataTable)]
pub fn data_table(props: &DataTableProps) -> Html {
    html! {
        <div class="card table-card">
            <table class="data-table">
                <thead>
                    <tr>
                        { for props.model.columns.iter().map(|col| html! { <th>{ *col }</th> }) }
                        <th>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for props.model.rows.iter().map(|row| {
                        render_row(row, props.on_command.clone())
                    })}
                </tbody>
            </table>
        </div>
    }
}

fn render_row(row: &Row, on_command: Option<Callback<RowCommand>>) -> Html {
    let on_edit = row_command(on_command.clone(), RowCommand::Edit(row.key.clone()));
    let on_delete = row_command(on_command, RowCommand::Delete(row.key.clone()));

    html! {
        <tr key={row.key.clone()}>
            { for row.cells.iter().map(render_cell) }
            <td class="actions-cell">
                <button class="icon-button" title="Modifier" onclick={on_edit}>
                    {"✎"}
                </button>
                <button class="icon-button icon-button-danger" title="Supprimer" onclick={on_delete}>
                    {"✕"}
                </button>
            </td>
        </tr>
    }
}

fn render_cell(cell: &Cell) -> Html {
    match cell {
        Cell::Text(text) => html! { <td>{ text }</td> },
        Cell::Chip { label, tone, icon } => html! {
            <td>
                <span class={classes!("chip", tone.css_class())}>
                    if let Some(icon) = icon {
                        <span class={classes!("icon", format!("icon-{icon}"))}></span>
                    }
                    { label }
                </span>
            </td>
        },
        Cell::Progress { pct, label, tone } => html! {
            <td>
                <div class="progress-cell">
                    <div class="progress-bar">
                        <div
                            class={classes!("progress-bar-fill", tone.css_class())}
                            style={format!("width: {pct:.0}%")}
                        />
                    </div>
                    <span class="progress-label">{ label }</span>
                </div>
            </td>
        },
    }
}

fn row_command(
    on_command: Option<Callback<RowCommand>>,
    command: RowCommand,
) -> Callback<MouseEvent> {
    Callback::from(move |_| {
        if let Some(callback) = &on_command {
            callback.emit(command.clone());
        }
    })
}
