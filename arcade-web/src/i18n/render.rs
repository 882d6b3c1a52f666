use crate::i18n::bundle::with_bundle;
use serde_json::Value;
use std::collections::BTreeMap;

fn lookup<'a>(root: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(root, |node, part| node.get(part))
}

/// CLDR plural category for `count`.
fn plural_category(lang: &str, count: f64) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let locales = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(lang));
        let rules = js_sys::Intl::PluralRules::new(&locales, &js_sys::Object::new());
        if let Some(selected) = rules.select(count).as_string() {
            return selected;
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = lang;

    if (count - 1.0).abs() < f64::EPSILON {
        "one".to_string()
    } else if count.abs() < f64::EPSILON {
        "zero".to_string()
    } else {
        "other".to_string()
    }
}

fn pick_form<'a>(
    forms: &'a serde_json::Map<String, Value>,
    lang: &str,
    args: Option<&BTreeMap<&str, &str>>,
) -> Option<&'a str> {
    let count = args
        .and_then(|m| m.get("count"))
        .and_then(|raw| raw.parse::<f64>().ok());
    count
        .and_then(|n| forms.get(&plural_category(lang, n)))
        .or_else(|| forms.get("_"))
        .and_then(Value::as_str)
}

fn render_value(value: &Value, lang: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    let mut text = match value {
        Value::String(s) => s.clone(),
        Value::Object(forms) => pick_form(forms, lang, args)?.to_string(),
        _ => return None,
    };

    for (k, v) in args.into_iter().flatten() {
        text = text.replace(&format!("{{{{{k}}}}}"), v);
        text = text.replace(&format!("{{{k}}}"), v);
    }
    Some(text)
}

fn resolve(key: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    with_bundle(|bundle| {
        lookup(&bundle.translations, key)
            .and_then(|v| render_value(v, &bundle.lang, args))
            .or_else(|| lookup(&bundle.fallback, key).and_then(|v| render_value(v, &bundle.lang, args)))
    })
}

/// Translate `key` in the active language, falling back to English and
/// then to the key itself.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate `key` with `{name}` / `{{name}}` substitution.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    resolve(key, args).unwrap_or_else(|| key.to_string())
}

/// Pluralised label for a count, e.g. `grid.results` with 3 gives "3 Results".
#[must_use]
pub fn count_label(key: &str, count: usize) -> String {
    let count = count.to_string();
    let mut args = BTreeMap::new();
    args.insert("count", count.as_str());
    tr(key, Some(&args))
}
