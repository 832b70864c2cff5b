use adminportal::state::labels;

#[test]
fn test_known_keys_resolve() {
    assert_eq!(labels::tr("table.empty_title"), "Nenhum resultado encontrado");
    assert_eq!(labels::tr("modal.save"), "Salvar");
}

#[test]
fn test_unknown_key_falls_back_to_key() {
    assert_eq!(labels::tr("table.nope"), "table.nope");
}

#[test]
fn test_fill_substitutes_placeholders() {
    assert_eq!(
        labels::fill("table.records", &[("exibidos", "3"), ("total", "12")]),
        "3 de 12 registros"
    );
    assert_eq!(
        labels::fill("table.filter_placeholder", &[("campo", "empresa")]),
        "Procurar empresa..."
    );
}

#[test]
fn test_fill_does_not_expand_substituted_values() {
    assert_eq!(
        labels::fill("modal.title", &[("campo", "{nome}"), ("nome", "Acme")]),
        "Editar {nome} - Acme"
    );
    assert_eq!(
        labels::fill("table.records", &[("exibidos", "{total}"), ("total", "12")]),
        "{total} de 12 registros"
    );
}

#[test]
fn test_fill_keeps_unknown_placeholders() {
    assert_eq!(labels::fill("modal.title", &[("nome", "Acme")]), "Editar {campo} - Acme");
    assert_eq!(labels::fill("table.empty_title", &[("nome", "Acme")]), "Nenhum resultado encontrado");
}

#[test]
fn test_catalog_values_are_strings() {
    let catalog: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(include_str!("../assets/labels/pt-BR.json"))
            .expect("pt-BR.json should be a JSON object");
    assert!(catalog.values().all(serde_json::Value::is_string));
}
