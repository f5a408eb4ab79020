//! Main application component

use leptos::prelude::*;

use crate::components::{
    chat_panel::ChatPanel, score_viewer::ScoreViewer, sidebar::Sidebar, upload_panel::UploadPanel,
};

/// A sheet-music entry shown in the viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub title: &'static str,
    pub image_url: &'static str,
}

/// Fixed demo scores backing the thumbnail strip
pub const SAMPLE_SCORES: [Score; 3] = [
    Score {
        title: "Adam Te Deum",
        image_url: "assets/scores/adam-te-deum.svg",
    },
    Score {
        title: "Pange Lingua",
        image_url: "assets/scores/pange-lingua.svg",
    },
    Score {
        title: "Adoro Te Devote",
        image_url: "assets/scores/adoro-te-devote.svg",
    },
];

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    let config = crate::config::backend_config();

    view! {
        <div class="app-frame">
            <Sidebar />

            <main class="content">
                <div class="chat-column">
                    <ChatPanel chat_url=config.chat_url() />
                </div>
                <div class="score-column">
                    <UploadPanel upload_url=config.upload_url() />
                    <ScoreViewer />
                </div>
            </main>
        </div>
    }
}
