use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Quiet period before typed search text reaches the list query.
pub(crate) const SEARCH_DEBOUNCE_MS: i32 = 300;

/// Timing-free debounce state.
///
/// Every input bumps the generation; a timer armed for an older generation
/// is a no-op when it fires. The committed text only moves forward through
/// [`Debouncer::fire`].
#[derive(Clone, Debug, Default)]
pub(crate) struct Debouncer {
    committed: String,
    pending: Option<String>,
    generation: u64,
}

impl Debouncer {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            committed: initial.into(),
            pending: None,
            generation: 0,
        }
    }

    #[cfg(test)]
    pub fn committed(&self) -> &str {
        &self.committed
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Records a keystroke. Returns the generation the caller's timer must fire with.
    pub fn on_input(&mut self, raw: impl Into<String>) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.pending = Some(raw.into());
        self.generation
    }

    /// Timer callback. Returns the newly committed text, or `None` when the
    /// timer was superseded or the text did not actually change.
    pub fn fire(&mut self, generation: u64) -> Option<String> {
        if generation != self.generation {
            return None;
        }
        let next = self.pending.take()?;
        if next == self.committed {
            return None;
        }
        self.committed = next.clone();
        Some(next)
    }

    pub fn cancel(&mut self) {
        self.pending = None;
        self.generation = self.generation.wrapping_add(1);
    }
}

/// Debounced mirror of `source`, updated `delay_ms` after it stops changing.
pub(crate) fn use_debounced(source: Signal<String>, delay_ms: i32) -> Signal<String> {
    let initial = source.get_untracked();
    let committed = RwSignal::new(initial.clone());
    let debouncer = StoredValue::new(Debouncer::new(initial));
    let timer_id: StoredValue<Option<i32>> = StoredValue::new(None);

    let clear_timer = move || {
        if let Some(tid) = timer_id.get_value() {
            if let Some(win) = web_sys::window() {
                win.clear_timeout_with_handle(tid);
            }
            timer_id.set_value(None);
        }
    };

    Effect::new(move |prev: Option<()>| {
        let raw = source.get();
        // The initial value is already committed.
        if prev.is_none() {
            return;
        }

        let Some(generation) = debouncer.try_update_value(|d| d.on_input(raw)) else {
            return;
        };

        clear_timer();
        let Some(win) = web_sys::window() else {
            return;
        };

        let cb = wasm_bindgen::closure::Closure::once_into_js(move || {
            timer_id.set_value(None);
            if let Some(Some(text)) = debouncer.try_update_value(|d| d.fire(generation)) {
                committed.set(text);
            }
        });

        let tid = win
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                cb.as_ref().unchecked_ref(),
                delay_ms,
            )
            .unwrap_or(0);
        timer_id.set_value(Some(tid));
    });

    on_cleanup(move || {
        debouncer.try_update_value(Debouncer::cancel);
        clear_timer();
    });

    committed.into()
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use crate::util::sleep_ms;
    use leptos::task::Executor;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_use_debounced_commits_once_for_a_burst_of_input() {
        let _ = Executor::init_wasm_bindgen();
        let owner = Owner::new();
        owner.set();

        let source = RwSignal::new(String::new());
        let debounced = use_debounced(source.into(), 60);
        let commits: RwSignal<Vec<String>> = RwSignal::new(Vec::new());
        Effect::new(move |prev: Option<()>| {
            let text = debounced.get();
            if prev.is_some() {
                commits.update(|c| c.push(text));
            }
        });
        sleep_ms(0).await;

        source.set("todo".to_string());
        sleep_ms(20).await;
        source.set("todo list".to_string());
        sleep_ms(30).await;

        // 50 ms after the first keystroke, 30 ms after the second: the timer restarted.
        assert!(commits.get_untracked().is_empty());
        assert_eq!(debounced.get_untracked(), "");

        sleep_ms(120).await;
        assert_eq!(commits.get_untracked(), vec!["todo list".to_string()]);
        assert_eq!(debounced.get_untracked(), "todo list");

        owner.cleanup();
    }

    #[wasm_bindgen_test]
    async fn test_use_debounced_drops_pending_commit_on_cleanup() {
        let _ = Executor::init_wasm_bindgen();
        let root = Owner::new();
        root.set();

        let source = RwSignal::new(String::new());
        let child = root.child();
        let debounced = child.with(|| use_debounced(source.into(), 40));
        sleep_ms(0).await;

        source.set("todo".to_string());
        sleep_ms(10).await;
        assert_eq!(debounced.try_get_untracked().as_deref(), Some(""));

        child.cleanup();
        sleep_ms(80).await;
        assert_ne!(debounced.try_get_untracked().as_deref(), Some("todo"));
    }
}
