use super::CopyButton;
use leptos::prelude::*;
use tubeseo_app::domain::AnalysisResult;

#[component]
pub fn AnalysisDisplay(result: AnalysisResult) -> impl IntoView {
    let tags_text = result.tags_text();
    let hashtags_text = result.hashtags_text();
    let AnalysisResult {
        title,
        tags,
        hashtags,
        trend_analysis,
        explanation,
        ..
    } = result;
    let title_text = title.clone();

    view! {
        <div class="analysis">
            <section class="section">
                <div class="section__header">
                    <h2 class="section__title">"Optimized Title"</h2>
                    <CopyButton text=title_text/>
                </div>
                <p class="section__body">{title}</p>
            </section>

            <section class="section">
                <div class="section__header">
                    <h2 class="section__title">"Tags"</h2>
                    <CopyButton text=tags_text/>
                </div>
                <div class="chips">
                    {tags.into_iter().map(|tag| view! {
                        <span class="chip chip--tag">{tag}</span>
                    }).collect::<Vec<_>>()}
                </div>
            </section>

            <section class="section">
                <div class="section__header">
                    <h2 class="section__title">"Hashtags"</h2>
                    <CopyButton text=hashtags_text/>
                </div>
                <div class="chips">
                    {hashtags.into_iter().map(|hashtag| view! {
                        <span class="chip chip--hashtag">{hashtag}</span>
                    }).collect::<Vec<_>>()}
                </div>
            </section>

            {trend_analysis.map(|text| view! {
                <section class="section">
                    <h2 class="section__title">"Trend Analysis"</h2>
                    <p class="section__body section__body--prose">{text}</p>
                </section>
            })}

            {explanation.map(|text| view! {
                <section class="section">
                    <h2 class="section__title">"Strategy Explanation"</h2>
                    <p class="section__body section__body--prose">{text}</p>
                </section>
            })}
        </div>
    }
}
