use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Looks up a UI string; unknown keys come back unchanged.
pub fn tr(key: &'static str) -> &'static str {
    catalog().get(key).map(String::as_str).unwrap_or(key)
}

/// Looks up a UI string and substitutes its `{name}` placeholders.
///
/// The template is scanned once, so substituted values are never expanded
/// again. Unknown placeholders are kept as written.
pub fn fill(key: &'static str, args: &[(&str, &str)]) -> String {
    let template = tr(key);
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            rest = &rest[open..];
            break;
        };
        let name = &after[..close];
        match args.iter().find(|(arg, _)| *arg == name) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[open..open + close + 2]),
        }
        rest = &after[close + 1..];
    }
    out.push_str(rest);
    out
}

fn catalog() -> &'static BTreeMap<String, String> {
    CATALOG.get_or_init(|| {
        serde_json::from_str(include_str!("../../assets/labels/pt-BR.json"))
            .unwrap_or_else(|err| panic!("failed to parse label catalog: {err}"))
    })
}

static CATALOG: OnceLock<BTreeMap<String, String>> = OnceLock::new();
