use dioxus::prelude::*;

use crate::state::column::{Column, ColumnError};
use crate::state::data_model::TableRow;
use crate::state::edit_modal::ModalAction;
use crate::state::labels;
use crate::state::table_state::{CellUpdate, RecordCount, SortOrder, TableState};
use crate::ui::edit_modal::EditModal;

type TableSignal<T> = Signal<Result<TableState<T>, ColumnError>>;

#[derive(Props, Clone, PartialEq)]
pub struct DataTableProps<T: TableRow + Clone + PartialEq + 'static> {
    columns: Vec<Column<T>>,
    data: ReadOnlySignal<Vec<T>>,
    on_update: Option<EventHandler<CellUpdate<T>>>,
    #[props(default)]
    class: String,
}

/// Sortable, filterable table with dialog-based cell editing.
///
/// The rows are only read. A committed edit is handed to `on_update`, and it
/// shows up in the table once the owner writes it into `data`.
#[allow(non_snake_case)]
pub fn DataTable<T: TableRow + Clone + PartialEq + 'static>(props: DataTableProps<T>) -> Element {
    let DataTableProps {
        columns,
        data,
        on_update,
        class,
    } = props;

    let table: TableSignal<T> = use_signal(move || {
        TableState::new(columns).inspect_err(|err| tracing::error!("rejected column set: {err}"))
    });

    let snapshot = table.read().clone();
    let state = match snapshot {
        Ok(state) => state,
        Err(err) => {
            let message = labels::fill("error.columns", &[("erro", err.to_string().as_str())]);
            return rsx! {
                p { class: "table-error", id: "table-error", "{message}" }
            };
        }
    };

    let rows = data.read();
    let visible = state.visible_row_indices(&rows);
    let count = RecordCount {
        shown: visible.len(),
        total: rows.len(),
    };
    let session = state.editor().session().cloned();
    let has_filters = !state.filters().is_empty();
    let empty_title = labels::tr("table.empty_title");
    let empty_hint = labels::tr("table.empty_hint");
    let clear_label = labels::tr("table.clear_filters");
    let edit_hint = labels::tr("table.edit_hint");

    rsx! {
        div { class: "data-table {class}",
            div { class: "table-container", id: "table-container",
                table {
                    thead {
                        tr {
                            for column in state.columns() {
                                th {
                                    key: "{column.key}",
                                    class: header_class(column, state.sort_order_for(&column.key)),
                                    id: format!("col-{}", sanitize_id(&column.key)),
                                    onclick: {
                                        let key = column.key.clone();
                                        move |_| {
                                            with_table(table, |state| state.sort_by_column_toggle(&key));
                                        }
                                    },
                                    div { class: "th-content",
                                        span { class: "th-label", "{column.label}" }
                                        if let Some(order) = state.sort_order_for(&column.key) {
                                            span {
                                                class: "sort-indicator",
                                                title: sort_title(&order),
                                                {sort_arrow(&order)}
                                            }
                                        }
                                        if column.filterable {
                                            input {
                                                class: "filter-input",
                                                id: format!("filter-{}", sanitize_id(&column.key)),
                                                r#type: "text",
                                                placeholder: labels::fill(
                                                    "table.filter_placeholder",
                                                    &[("campo", column.label.to_lowercase().as_str())],
                                                ),
                                                value: state.filter_text(&column.key).to_string(),
                                                onclick: move |evt| evt.stop_propagation(),
                                                oninput: {
                                                    let key = column.key.clone();
                                                    move |evt: Event<FormData>| {
                                                        with_table(table, |state| state.set_filter(&key, evt.value()));
                                                    }
                                                },
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                    tbody {
                        for (view_index, data_index) in visible.iter().copied().enumerate() {
                            tr {
                                key: "{data_index}",
                                class: row_class(view_index),
                                id: format!("row-{view_index}"),
                                for column in state.columns() {
                                    td {
                                        key: "{column.key}",
                                        class: cell_class(column, state.editor().is_editing(view_index, &column.key)),
                                        id: format!("cell-{}-{}", view_index, sanitize_id(&column.key)),
                                        onclick: {
                                            let key = column.key.clone();
                                            move |_| {
                                                let rows = data.read();
                                                with_table(table, |state| state.open_editor(&rows, view_index, &key));
                                            }
                                        },
                                        div { class: "cell-content",
                                            span { class: "cell-value", {column.display(&rows[data_index])} }
                                            if column.editable {
                                                span { class: "edit-icon", title: edit_hint, "\u{270E}" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if visible.is_empty() {
                div { class: "empty-state", id: "empty-message",
                    p { "{empty_title}" }
                    p { class: "empty-hint", "{empty_hint}" }
                    if has_filters {
                        button {
                            class: "toolbar-btn",
                            id: "btn-clear-filters",
                            onclick: move |_| {
                                with_table(table, |state| state.clear_filters());
                            },
                            "{clear_label}"
                        }
                    }
                }
            }

            div { class: "table-footer",
                p { id: "record-count", "{count}" }
            }

            if let Some(session) = session {
                EditModal {
                    session,
                    on_stage: move |value: String| {
                        with_table(table, |state| state.stage_edit(value));
                    },
                    on_action: move |action: ModalAction| resolve_modal(table, data, on_update, action),
                }
            }
        }
    }
}

/// Applies the dialog's decision. The owner's handler runs after every signal
/// borrow is released, since it usually writes the very rows this table reads.
fn resolve_modal<T: TableRow + Clone + 'static>(
    table: TableSignal<T>,
    data: ReadOnlySignal<Vec<T>>,
    on_update: Option<EventHandler<CellUpdate<T>>>,
    action: ModalAction,
) {
    let update = {
        let rows = data.read();
        with_table(table, |state| {
            let mut update = None;
            state.apply_modal_action(&rows, action, |row, field, value| {
                update = Some(CellUpdate {
                    row: row.clone(),
                    field: field.to_string(),
                    value,
                });
            });
            update
        })
        .flatten()
    };

    match (update, on_update) {
        (Some(update), Some(handler)) => handler.call(update),
        (Some(update), None) => {
            tracing::debug!(field = %update.field, "edit committed without an update handler");
        }
        _ => {}
    }
}

fn with_table<T: TableRow + 'static, R>(
    mut table: TableSignal<T>,
    f: impl FnOnce(&mut TableState<T>) -> R,
) -> Option<R> {
    table.with_mut(|result| result.as_mut().ok().map(f))
}

fn header_class<T>(column: &Column<T>, order: Option<SortOrder>) -> String {
    let interactive = if column.sortable { "sortable" } else { "" };
    let sort_class = match order {
        Some(SortOrder::Asc) => "sorted-asc",
        Some(SortOrder::Desc) => "sorted-desc",
        None => "",
    };
    join_classes(interactive, sort_class)
}

fn row_class(view_index: usize) -> &'static str {
    if view_index % 2 == 0 {
        "even"
    } else {
        "odd"
    }
}

fn cell_class<T>(column: &Column<T>, is_editing: bool) -> String {
    let base = if column.editable { "cell editable" } else { "cell" };
    if is_editing {
        join_classes(base, "editing-cell")
    } else {
        base.to_string()
    }
}

fn sort_arrow(order: &SortOrder) -> &'static str {
    match order {
        SortOrder::Asc => "\u{25B2}",
        SortOrder::Desc => "\u{25BC}",
    }
}

fn sort_title(order: &SortOrder) -> &'static str {
    match order {
        SortOrder::Asc => labels::tr("table.sort_asc"),
        SortOrder::Desc => labels::tr("table.sort_desc"),
    }
}

fn join_classes(a: &str, b: &str) -> String {
    if a.is_empty() {
        return b.to_string();
    }
    if b.is_empty() {
        return a.to_string();
    }
    format!("{a} {b}")
}

fn sanitize_id(value: &str) -> String {
    value
        .chars()
        .map(|ch| if ch.is_ascii_alphanumeric() { ch } else { '_' })
        .collect()
}
