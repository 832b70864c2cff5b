use adminportal::state::cell_editor::EditTarget;
use adminportal::state::column::ChoiceOption;
use adminportal::state::edit_modal::{self, EditSession, EditorKind, ModalAction, ModalKey};

fn target() -> EditTarget {
    EditTarget {
        view_row: 0,
        column: "plano".to_string(),
    }
}

fn choice_session() -> EditSession {
    EditSession::new(
        target(),
        "Plano",
        edit_modal::modal_title("Plano", Some("Acme")),
        EditorKind::Choice(vec![ChoiceOption::plain("Básico"), ChoiceOption::plain("Premium")]),
        "Básico".to_string(),
    )
}

#[test]
fn test_session_is_seeded() {
    let session = choice_session();
    assert_eq!(session.target(), &target());
    assert_eq!(session.column_label(), "Plano");
    assert_eq!(session.draft(), "Básico");
    assert!(!session.is_text());
}

#[test]
fn test_choice_session_only_stages_known_values() {
    let mut session = choice_session();
    assert!(!session.stage("Ouro"));
    assert_eq!(session.draft(), "Básico");
    assert!(session.stage("Premium"));
    assert_eq!(session.draft(), "Premium");
}

#[test]
fn test_text_session_stages_anything() {
    let mut session = EditSession::new(
        target(),
        "Nome",
        edit_modal::modal_title("nome", None),
        EditorKind::Text,
        "Acme".to_string(),
    );
    assert!(session.is_text());
    assert!(session.stage(""));
    assert!(session.stage("Acme Brasil"));
    assert_eq!(session.draft(), "Acme Brasil");
}

#[test]
fn test_title_interpolates_row_name() {
    assert_eq!(choice_session().title(), "Editar Plano - Acme");
    assert_eq!(
        edit_modal::modal_title("tipo de faturamento", Some("Acme")),
        "Editar tipo de faturamento - Acme"
    );
}

#[test]
fn test_title_falls_back_without_name() {
    assert_eq!(edit_modal::modal_title("Plano", None), "Editar valor");
    assert_eq!(edit_modal::modal_title("Plano", Some("")), "Editar valor");
    assert_eq!(edit_modal::modal_title("", Some("Acme")), "Editar valor");
}

#[test]
fn test_title_keeps_braces_in_names() {
    assert_eq!(edit_modal::modal_title("{nome}", Some("Acme")), "Editar {nome} - Acme");
    assert_eq!(edit_modal::modal_title("plano", Some("{campo}")), "Editar plano - {campo}");
}

#[test]
fn test_key_contract() {
    assert_eq!(ModalKey::Enter.action(), Some(ModalAction::Commit));
    assert_eq!(ModalKey::Escape.action(), Some(ModalAction::Cancel));
    assert_eq!(ModalKey::Other.action(), None);
}
