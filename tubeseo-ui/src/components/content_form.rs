use crate::state::FormState;
use leptos::prelude::*;

#[component]
pub fn ContentForm(state: RwSignal<FormState>, #[prop(into)] on_submit: Callback<()>) -> impl IntoView {
    let is_loading = move || state.with(|s| s.loading);

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <form class="analyze-form" on:submit=on_form_submit>
            <label class="analyze-form__label" for="api-key">
                "OpenAI API Key (Optional - leave blank to use server default)"
            </label>
            <input
                id="api-key"
                type="password"
                class="analyze-form__input"
                placeholder="sk-..."
                autocomplete="off"
                prop:value=move || state.with(|s| s.api_key.clone())
                on:input=move |ev| state.update(|s| s.api_key = event_target_value(&ev))
            />

            <label class="analyze-form__label" for="news-content">"Your News Content"</label>
            <textarea
                id="news-content"
                class="analyze-form__textarea"
                rows="8"
                placeholder="Enter your news content here... Describe what your video is about in detail."
                prop:value=move || state.with(|s| s.content.clone())
                on:input=move |ev| state.update(|s| s.content = event_target_value(&ev))
            ></textarea>

            <button
                type="submit"
                class="analyze-form__button"
                prop:disabled=is_loading
            >
                {move || if is_loading() { "Analyzing..." } else { "Generate SEO Content" }}
            </button>
        </form>
    }
}
