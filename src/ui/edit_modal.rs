use dioxus::prelude::{Key, *};

use crate::state::edit_modal::{EditSession, EditorKind, ModalAction, ModalKey};
use crate::state::labels;

const INPUT_ID: &str = "edit-modal-input";

/// Dialog for one cell edit. Staged values go out through `on_stage`; the
/// decision to keep or drop them goes out through `on_action`.
#[component]
pub fn EditModal(
    session: EditSession,
    on_stage: EventHandler<String>,
    on_action: EventHandler<ModalAction>,
) -> Element {
    // Every listener below belongs to elements that only exist while the dialog is mounted.
    use_drop(|| tracing::debug!("edit dialog unmounted"));

    let draft = session.draft().to_string();
    let title = session.title().to_string();
    let column_label = session.column_label().to_string();

    let placeholder = labels::tr("modal.select_placeholder");
    let cancel_label = labels::tr("modal.cancel");
    let save_label = labels::tr("modal.save");

    let editor = match session.kind() {
        EditorKind::Choice(options) => rsx! {
            label { class: "modal-label", r#for: INPUT_ID, "{column_label}" }
            select {
                class: "modal-select",
                id: INPUT_ID,
                value: "{draft}",
                onchange: move |evt| on_stage.call(evt.value()),
                onmounted: move |evt| async move {
                    let _ = evt.set_focus(true).await;
                },
                option { value: "", disabled: true, selected: draft.is_empty(), "{placeholder}" }
                for choice in options.iter() {
                    option {
                        key: "{choice.value}",
                        value: "{choice.value}",
                        selected: choice.value == draft,
                        "{choice.label}"
                    }
                }
            }
        },
        EditorKind::Text => rsx! {
            input {
                class: "modal-input",
                id: INPUT_ID,
                r#type: "text",
                value: "{draft}",
                autofocus: true,
                oninput: move |evt| on_stage.call(evt.value()),
                onmounted: move |evt| async move {
                    let _ = evt.set_focus(true).await;
                    let _ = document::eval(&format!("document.getElementById('{INPUT_ID}')?.select();"));
                },
            }
        },
    };

    rsx! {
        div {
            class: "modal-backdrop",
            id: "edit-modal-backdrop",
            onclick: move |_| on_action.call(ModalAction::Cancel),
            div {
                class: "modal-body",
                id: "edit-modal",
                onclick: move |evt| evt.stop_propagation(),
                onkeydown: move |evt| {
                    if let Some(action) = modal_key(&evt.key()).action() {
                        evt.prevent_default();
                        on_action.call(action);
                    }
                },
                div { class: "modal-header",
                    h3 { class: "modal-title", "{title}" }
                    button {
                        class: "modal-close",
                        title: labels::tr("modal.close"),
                        onclick: move |_| on_action.call(ModalAction::Cancel),
                        "\u{2715}"
                    }
                }
                div { class: "modal-content",
                    {editor}
                    div { class: "modal-actions",
                        button {
                            class: "modal-btn",
                            id: "edit-modal-cancel",
                            onclick: move |_| on_action.call(ModalAction::Cancel),
                            "{cancel_label}"
                        }
                        button {
                            class: "modal-btn modal-btn-primary",
                            id: "edit-modal-save",
                            onclick: move |_| on_action.call(ModalAction::Commit),
                            "{save_label}"
                        }
                    }
                }
            }
        }
    }
}

pub fn modal_key(key: &Key) -> ModalKey {
    match key {
        Key::Enter => ModalKey::Enter,
        Key::Escape => ModalKey::Escape,
        _ => ModalKey::Other,
    }
}
