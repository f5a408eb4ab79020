//! Sidebar navigation component

use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <aside class="sidebar">
            <div class="logo">"♪"</div>

            <nav class="nav">
                <button class="nav-item active" title="Upload">"⇪"</button>
                <button class="nav-item" title="Chat">"💬"</button>
                <button class="nav-item" title="Scores">"♫"</button>
            </nav>

            <button class="nav-item settings" title="Settings">"⚙"</button>
        </aside>
    }
}
