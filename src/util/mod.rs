/// Renders a server timestamp in the browser's locale and timezone.
///
/// Falls back to the raw value when the browser cannot parse it.
pub(crate) fn format_created_at(raw: &str) -> String {
    let d = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(raw));
    if d.get_time().is_nan() {
        return raw.to_string();
    }
    d.to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED)
        .as_string()
        .unwrap_or_else(|| raw.to_string())
}

/// First `max_chars` characters of `text`, with an ellipsis when cut.
pub(crate) fn preview(text: &str, max_chars: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{}…", head.trim_end())
    } else {
        head
    }
}

/// Resolves after `ms` milliseconds of wall-clock time, letting queued
/// effects and timers run in between.
#[cfg(all(test, target_arch = "wasm32"))]
pub(crate) async fn sleep_ms(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(win) = web_sys::window() {
            let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
        }
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_short_text_unchanged() {
        assert_eq!(preview("milk, eggs", 20), "milk, eggs");
        assert_eq!(preview("", 5), "");
    }

    #[test]
    fn test_preview_cuts_on_characters() {
        assert_eq!(preview("abcdef", 3), "abc…");
        assert_eq!(preview("ab cd", 3), "ab…");
        assert_eq!(preview("日本語テキスト", 3), "日本語…");
    }
}
