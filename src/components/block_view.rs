use yew::prelude::*;

use crate::types::Block;

/// Messages tagged with a leading "user:" get the user-side bubble. Purely
/// presentational; the data itself is never rewritten.
fn is_user_message(message: &str) -> bool {
    message.trim().to_lowercase().starts_with("user:")
}

#[derive(Properties, PartialEq)]
pub struct BlockViewProps {
    pub blocks: Vec<Block>,
    pub query: String,
}

#[function_component(BlockView)]
pub fn block_view(props: &BlockViewProps) -> Html {
    if props.blocks.is_empty() {
        return html! {
            <p style="color:#888; text-align:center; grid-column:1 / -1; padding:2em 0;">
                { format!("No results found for \"{}\"", props.query) }
            </p>
        };
    }

    html! {
        <div style="display:grid; grid-template-columns:1fr 1fr; gap:1.5em;">
            { for props.blocks.iter().map(|block| {
                html! {
                    <div style="display:flex; flex-direction:column; background:white; border:1px solid #ddd; border-radius:8px; overflow:hidden;">
                        <div style="background:#e7f3ff; border-bottom:1px solid #ddd; padding:0.75em 1em;">
                            <h3 style="margin:0; font-size:1.1em; color:#0056b3;">{ &block.category }</h3>
                        </div>
                        <div style="flex:1; padding:1em; display:flex; flex-direction:column; gap:0.75em; overflow-y:auto; max-height:24em;">
                            { for block.messages.iter().map(|msg| {
                                let bubble_style = if is_user_message(msg) {
                                    "padding:0.75em; border-radius:6px; font-size:0.9em; background:#f1f1f1; color:#333; margin-left:1.5em;"
                                } else {
                                    "padding:0.75em; border-radius:6px; font-size:0.9em; background:#e7f3ff80; color:#333; margin-right:1.5em;"
                                };
                                html! {
                                    <div style={bubble_style}>
                                        { msg }
                                    </div>
                                }
                            })}
                        </div>
                    </div>
                }
            })}
        </div>
    }
}
