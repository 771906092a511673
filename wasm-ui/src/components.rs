//! UI components for the relay page.

use yew::prelude::*;

/// Heading, text area and submit button.
#[derive(Properties, PartialEq)]
pub struct InputPanelProps {
    pub value: String,
    pub on_change: Callback<String>,
    pub on_submit: Callback<()>,
}

#[function_component(InputPanel)]
pub fn input_panel(props: &InputPanelProps) -> Html {
    let on_input = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let target: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            on_change.emit(target.value());
        })
    };

    let on_submit_click = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |_| {
            on_submit.emit(());
        })
    };

    html! {
        <>
            <h1>{ "Input Relay" }</h1>
            <textarea
                class="relay-input"
                value={props.value.clone()}
                oninput={on_input}
                style="width: 100%; min-height: 100px;"
            />
            <button
                class="submit-button"
                onclick={on_submit_click}
                style="display: block; margin-top: 10px;"
            >
                { "Send to Server" }
            </button>
        </>
    }
}

/// Server reply. Renders nothing until there is a non-empty reply.
#[derive(Properties, PartialEq)]
pub struct ResponseBlockProps {
    pub value: String,
}

#[function_component(ResponseBlock)]
pub fn response_block(props: &ResponseBlockProps) -> Html {
    html! {
        if !props.value.is_empty() {
            <div
                class="response"
                style="background-color: blue; color: white; margin-top: 10px; padding: 10px;"
            >
                { &props.value }
            </div>
        }
    }
}
