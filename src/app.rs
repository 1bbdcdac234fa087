use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::organize_conversation;
use crate::components::BlockView;
use crate::search::filter_blocks;
use crate::storage::{BlockStore, LocalStorageStore};
use crate::types::Block;

#[derive(Clone, PartialEq)]
pub enum ProcessingState {
    Idle,
    Loading,
    Success,
    Error(String),
}

#[function_component(App)]
pub fn app(_props: &()) -> Html {
    let input_text = use_state(|| String::new());
    let search_query = use_state(|| String::new());
    let blocks = use_state(|| Vec::<Block>::new());
    let processing_state = use_state(|| ProcessingState::Idle);
    let is_mounted = use_state(|| false);

    // Cached blocks are read only once the component is attached; until then
    // nothing stored is displayed.
    {
        let blocks = blocks.clone();
        let is_mounted = is_mounted.clone();
        use_effect_with((), move |_| {
            blocks.set(LocalStorageStore.load());
            is_mounted.set(true);
            || ()
        });
    }

    let on_input_change = {
        let input_text = input_text.clone();
        Callback::from(move |event: InputEvent| {
            let target = event.target_unchecked_into::<HtmlTextAreaElement>();
            input_text.set(target.value());
        })
    };

    let on_search_change = {
        let search_query = search_query.clone();
        Callback::from(move |event: InputEvent| {
            let target = event.target_unchecked_into::<HtmlInputElement>();
            search_query.set(target.value());
        })
    };

    let on_organize = {
        let input_text = input_text.clone();
        let blocks = blocks.clone();
        let processing_state = processing_state.clone();
        Callback::from(move |_: MouseEvent| {
            // One request at a time; the button is disabled while loading but
            // the guard also covers a click that slips through.
            if matches!(*processing_state, ProcessingState::Loading) {
                return;
            }

            let text = (*input_text).clone();
            if text.trim().is_empty() {
                processing_state.set(ProcessingState::Error(
                    "Please paste a conversation first.".to_string(),
                ));
                return;
            }

            processing_state.set(ProcessingState::Loading);

            let input_text = input_text.clone();
            let blocks = blocks.clone();
            let processing_state = processing_state.clone();
            spawn_local(async move {
                match organize_conversation(text).await {
                    Ok(result) => {
                        LocalStorageStore.save(&result.blocks);
                        blocks.set(result.blocks);
                        input_text.set(String::new());
                        processing_state.set(ProcessingState::Success);
                    }
                    Err(e) => {
                        web_sys::console::log_1(
                            &format!("Error organizing conversation: {:?}", e).into(),
                        );
                        // Cached blocks and the input text stay untouched.
                        processing_state.set(ProcessingState::Error(
                            "Failed to organize conversation. Please try again.".to_string(),
                        ));
                    }
                }
            });
        })
    };

    let is_loading = matches!(*processing_state, ProcessingState::Loading);
    let filtered_blocks = filter_blocks(&blocks, &search_query);

    html! {
        <main style="min-height:100vh; background:#f8f9fa; padding:3em 1em; font-family:Arial,sans-serif;">
            <div style="max-width:56em; margin:0 auto; display:flex; flex-direction:column; gap:2em;">
                <div style="text-align:center;">
                    <h1 style="margin:0; color:#333;">{ "Chat Organizer" }</h1>
                    <p style="margin-top:0.5em; color:#666;">
                        { "Paste your raw conversation below to instantly categorize it by topic." }
                    </p>
                </div>

                <div style="background:white; border:1px solid #ddd; border-radius:8px; padding:1.5em; display:flex; flex-direction:column; gap:1em;">
                    <textarea
                        rows="10"
                        style="width:100%; padding:1em; border:1px solid #ccc; border-radius:6px; resize:vertical; font-size:0.95em; box-sizing:border-box;"
                        placeholder="Paste your conversation here...\n\nUser: How do I price my SaaS product?\nAssistant: Consider these pricing strategies..."
                        value={(*input_text).clone()}
                        oninput={on_input_change}
                        disabled={is_loading}
                    />

                    <button
                        onclick={on_organize}
                        disabled={is_loading || input_text.trim().is_empty()}
                        style={format!(
                            "width:100%; padding:0.7em 0; font-size:1em; border:none; border-radius:6px; {}",
                            if is_loading || input_text.trim().is_empty() {
                                "background:#ccc; cursor:not-allowed;"
                            } else {
                                "background:#007bff; color:white; cursor:pointer;"
                            }
                        )}
                    >
                        { if is_loading { "Ingesting & Organizing..." } else { "Ingest & Organize" } }
                    </button>

                    { match &*processing_state {
                        ProcessingState::Loading => html! {
                            <div style="padding:1em; background:#e7f3ff; border:1px solid #b3d9ff; border-radius:4px; color:#0056b3;">
                                { "Organizing your conversation into topic blocks..." }
                            </div>
                        },
                        ProcessingState::Success => html! {
                            <div style="padding:1em; background:#d4edda; border:1px solid #c3e6cb; border-radius:4px; color:#155724;">
                                { format!("✓ Organized into {} block{}", blocks.len(), if blocks.len() != 1 { "s" } else { "" }) }
                            </div>
                        },
                        ProcessingState::Error(msg) => html! {
                            <div style="padding:1em; background:#f8d7da; border:1px solid #f5c6cb; border-radius:4px; color:#721c24;">
                                { msg }
                            </div>
                        },
                        ProcessingState::Idle => html! {},
                    }}
                </div>

                { if *is_mounted && !blocks.is_empty() {
                    html! {
                        <div style="display:flex; flex-direction:column; gap:1.5em;">
                            <input
                                type="text"
                                style="width:100%; padding:0.75em 1em; border:1px solid #ccc; border-radius:6px; font-size:0.95em; box-sizing:border-box;"
                                placeholder="Search across all categories and messages..."
                                value={(*search_query).clone()}
                                oninput={on_search_change}
                            />
                            <BlockView blocks={filtered_blocks} query={(*search_query).clone()} />
                        </div>
                    }
                } else {
                    html! {}
                }}
            </div>
        </main>
    }
}
