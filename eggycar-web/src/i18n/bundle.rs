use once_cell::sync::Lazy;
use serde_json::Value;

/// Language of the bundled copy.
pub const LANG: &str = "en";

static TRANSLATIONS: Lazy<Value> = Lazy::new(|| {
    serde_json::from_str(include_str!("../../i18n/en.json")).unwrap_or_else(|err| {
        log::error!("translations for {LANG} are malformed: {err}");
        Value::Object(serde_json::Map::new())
    })
});

pub(super) fn translations() -> &'static Value {
    &TRANSLATIONS
}

/// Mirror [`LANG`] on `<html lang>`.
pub fn apply_document_lang() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(el) = crate::dom::document().and_then(|doc| doc.document_element()) {
            if let Err(err) = el.set_attribute("lang", LANG) {
                log::warn!("cannot set document lang: {}", crate::dom::js_error_message(&err));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_copy_parses() {
        let value = translations();
        assert!(value.is_object());
        assert!(value.get("nav").is_some());
    }
}
