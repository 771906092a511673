//! Main application component.

use gloo::console;
use std::rc::Rc;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::{InputPanel, ResponseBlock};
use crate::relay::ProcessRequest;

/// Page state. Lives as long as the component; nothing is persisted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageState {
    /// Current contents of the text area.
    pub input_text: String,
    /// Body of the most recently resolved response.
    pub response_text: String,
}

/// State transitions.
#[derive(Clone, Debug, PartialEq)]
pub enum PageAction {
    /// The user edited the text area.
    InputChanged(String),
    /// A submit resolved with this body.
    ResponseReceived(String),
}

impl Reducible for PageState {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            PageAction::InputChanged(text) => next.input_text = text,
            PageAction::ResponseReceived(text) => next.response_text = text,
        }
        Rc::new(next)
    }
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    let state = use_reducer(PageState::default);

    let on_input_change = {
        let dispatcher = state.dispatcher();
        Callback::from(move |text: String| {
            dispatcher.dispatch(PageAction::InputChanged(text));
        })
    };

    // Overlapping submits are not serialized: each one dispatches its own
    // reply when it resolves, so the last to resolve is what stays on screen.
    let on_submit = {
        let state = state.clone();
        Callback::from(move |_| {
            let request = ProcessRequest::new(state.input_text.clone());
            let dispatcher = state.dispatcher();
            spawn_local(async move {
                match request.send().await {
                    Ok(text) => dispatcher.dispatch(PageAction::ResponseReceived(text)),
                    Err(e) => console::error!(format!("POST /process failed: {}", e)),
                }
            });
        })
    };

    html! {
        <div class="relay-page">
            <InputPanel
                value={state.input_text.clone()}
                on_change={on_input_change}
                on_submit={on_submit}
            />
            <ResponseBlock value={state.response_text.clone()} />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: PageState, actions: Vec<PageAction>) -> PageState {
        let mut state = Rc::new(state);
        for action in actions {
            state = state.reduce(action);
        }
        (*state).clone()
    }

    #[test]
    fn test_initial_state_empty() {
        let state = PageState::default();
        assert_eq!(state.input_text, "");
        assert_eq!(state.response_text, "");
    }

    #[test]
    fn test_input_change_replaces_text() {
        let state = apply(
            PageState::default(),
            vec![
                PageAction::InputChanged("h".to_string()),
                PageAction::InputChanged("hello".to_string()),
            ],
        );
        assert_eq!(state.input_text, "hello");
        assert_eq!(state.response_text, "");
    }

    #[test]
    fn test_input_kept_verbatim() {
        for text in ["  padded  ", "a&b=c", "multi\nline\n", "ünïcödé ✓", ""] {
            let state = apply(
                PageState::default(),
                vec![PageAction::InputChanged(text.to_string())],
            );
            assert_eq!(state.input_text, text);
        }
    }

    #[test]
    fn test_response_replaces_previous() {
        let state = apply(
            PageState::default(),
            vec![
                PageAction::ResponseReceived("first".to_string()),
                PageAction::ResponseReceived("second".to_string()),
            ],
        );
        assert_eq!(state.response_text, "second");
    }

    #[test]
    fn test_empty_response_clears_display() {
        let state = apply(
            PageState::default(),
            vec![
                PageAction::ResponseReceived("hello".to_string()),
                PageAction::ResponseReceived(String::new()),
            ],
        );
        assert_eq!(state.response_text, "");
    }

    #[test]
    fn test_last_resolved_response_wins() {
        // Submit "one", then "two"; the reply to "two" resolves first.
        let state = apply(
            PageState::default(),
            vec![
                PageAction::InputChanged("one".to_string()),
                PageAction::InputChanged("two".to_string()),
                PageAction::ResponseReceived("two".to_string()),
                PageAction::ResponseReceived("one".to_string()),
            ],
        );
        assert_eq!(state.response_text, "one");
    }

    #[test]
    fn test_response_does_not_touch_input() {
        let state = apply(
            PageState::default(),
            vec![
                PageAction::InputChanged("sent".to_string()),
                PageAction::InputChanged("typed while waiting".to_string()),
                PageAction::ResponseReceived("sent".to_string()),
            ],
        );
        assert_eq!(state.input_text, "typed while waiting");
        assert_eq!(state.response_text, "sent");
    }
}
