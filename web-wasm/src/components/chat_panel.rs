//! Chat panel component

use clef_common::{ChatLog, Message, Role};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;

#[component]
pub fn ChatPanel(chat_url: String) -> impl IntoView {
    let (log, set_log) = signal(ChatLog::new());
    let (input, set_input) = signal(String::new());

    let is_loading = move || log.with(|l| l.is_loading());

    let send = move || {
        let text = input.get_untracked();
        let mut accepted = None;
        set_log.update(|log| accepted = log.begin_send(&text));
        let Some(message) = accepted else {
            return;
        };
        set_input.set(String::new());

        let chat_url = chat_url.clone();
        spawn_local(async move {
            match api::chat::send_message(&chat_url, &message).await {
                Ok(reply) => set_log.update(|log| log.push_reply(reply)),
                Err(e) => {
                    gloo::console::error!("Error sending message:", e);
                    set_log.update(|log| log.push_error());
                }
            }
        });
    };
    let send_on_enter = send.clone();

    view! {
        <section class="chat-panel">
            <div class="panel-header">
                <h2>"Chat"</h2>
            </div>

            <div class="message-list">
                <For
                    each=move || {
                        log.with(|l| l.messages().to_vec())
                            .into_iter()
                            .enumerate()
                            .collect::<Vec<_>>()
                    }
                    key=|(idx, _)| *idx
                    children=|(_, message): (usize, Message)| {
                        view! { <MessageBubble message=message /> }
                    }
                />

                <Show when=is_loading>
                    <div class="message-row ai">
                        <div class="message-bubble thinking">
                            <span class="spinner"></span>
                            <span>"Thinking..."</span>
                        </div>
                    </div>
                </Show>
            </div>

            <div class="input-row">
                <input
                    type="text"
                    placeholder="Type a message..."
                    prop:value=move || input.get()
                    disabled=is_loading
                    on:input=move |ev| set_input.set(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            send_on_enter();
                        }
                    }
                />
                <button
                    class="btn btn-primary send-btn"
                    disabled=move || is_loading() || input.with(|text| text.trim().is_empty())
                    on:click=move |_| send()
                >
                    "Send"
                </button>
            </div>
        </section>
    }
}

#[component]
fn MessageBubble(message: Message) -> impl IntoView {
    let row_class = match message.role {
        Role::User => "message-row user",
        Role::Ai => "message-row ai",
    };

    view! {
        <div class=row_class>
            <div class="message-bubble">{message.content}</div>
        </div>
    }
}
