use leptos::prelude::*;

// Clipboard writes are best-effort: a denied permission is swallowed.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(inline_js = r#"
export function write_clipboard(text) {
    if (navigator.clipboard && navigator.clipboard.writeText) {
        navigator.clipboard.writeText(text).catch(function () {});
    }
}
"#)]
extern "C" {
    fn write_clipboard(text: &str);
}

pub fn copy_to_clipboard(text: &str) {
    #[cfg(feature = "hydrate")]
    write_clipboard(text);

    #[cfg(not(feature = "hydrate"))]
    tracing::debug!("Clipboard unavailable outside the browser ({} chars)", text.len());
}

#[component]
pub fn CopyButton(#[prop(into)] text: String) -> impl IntoView {
    view! {
        <button
            type="button"
            class="section__copy"
            on:click=move |_| copy_to_clipboard(&text)
        >
            "Copy"
        </button>
    }
}
