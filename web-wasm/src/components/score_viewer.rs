//! Score viewer component

use leptos::prelude::*;

use crate::app::{Score, SAMPLE_SCORES};

#[component]
pub fn ScoreViewer() -> impl IntoView {
    let (selected, set_selected) = signal(None::<Score>);

    view! {
        <section class="score-viewer">
            <div class="panel-header">
                <h2>"Score"</h2>
                <span class="score-chip">
                    {move || selected.get().map(|score| score.title).unwrap_or("Adam Te Deum")}
                </span>
            </div>

            <div class="score-display">
                <Show
                    when=move || selected.get().is_some()
                    fallback=|| {
                        view! {
                            <div class="empty-state">
                                <div class="empty-icon">"♫"</div>
                                <h3>"No Score Selected"</h3>
                                <p class="text-muted">
                                    "Upload a sheet music file or select from your library to view the score here."
                                </p>
                            </div>
                        }
                    }
                >
                    <img
                        class="score-image"
                        src=move || selected.get().map(|score| score.image_url).unwrap_or_default()
                        alt="Sheet Music"
                    />
                </Show>
            </div>

            <div class="thumbnail-strip">
                {SAMPLE_SCORES
                    .iter()
                    .map(|&score| {
                        // Clicking the selected score again clears the selection
                        let on_select = move |_| {
                            set_selected.update(|sel| {
                                if *sel == Some(score) {
                                    *sel = None;
                                } else {
                                    *sel = Some(score);
                                }
                            });
                        };
                        let is_current = move || selected.get() == Some(score);
                        view! {
                            <button
                                class="thumbnail"
                                class:selected=is_current
                                title=score.title
                                on:click=on_select
                            >
                                <span class="thumb-icon">"♫"</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
