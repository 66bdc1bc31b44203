use crate::i18n::bundle::translations;
use serde_json::Value;
use std::collections::BTreeMap;

fn lookup<'a>(root: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(root, |node, part| node.get(part))
}

fn interpolate(template: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    let Some(args) = args else {
        return template.to_string();
    };
    args.iter().fold(template.to_string(), |text, (k, v)| {
        text.replace(&format!("{{{{{k}}}}}"), v)
            .replace(&format!("{{{k}}}"), v)
    })
}

fn resolve(key: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    lookup(translations(), key)
        .and_then(Value::as_str)
        .map(|template| interpolate(template, args))
}

/// Translate a key.
///
/// Missing keys render as the key itself so gaps are visible on the page.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate a key and substitute `{name}` / `{{name}}` placeholders.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    resolve(key, args).unwrap_or_else(|| key.to_string())
}
