//! Message processing through the TEA update loop

use tokio::sync::mpsc;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message, its follow-ups and any resulting actions
pub fn process_message(state: &mut AppState, message: Message, msg_tx: &mpsc::Sender<Message>) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone());
        }

        // Continue with follow-up message
        msg = result.message;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::config::Settings;
    use crate::input_key::InputKey;
    use ptable_core::ContentBundle;

    fn state() -> AppState {
        AppState::new(
            Arc::new(ContentBundle::builtin().unwrap()),
            Settings::default(),
        )
    }

    #[tokio::test]
    async fn test_follow_up_messages_are_processed() {
        let (tx, _rx) = mpsc::channel(4);
        let mut state = state();

        // Key -> FocusNext -> focus moves
        process_message(&mut state, Message::Key(InputKey::Tab), &tx);
        assert_eq!(state.focused, 1);

        // Key -> Quit
        process_message(&mut state, Message::Key(InputKey::Char('q')), &tx);
        assert!(state.should_quit);
    }

    #[tokio::test]
    async fn test_link_action_is_dispatched() {
        let (tx, mut rx) = mpsc::channel(4);
        let mut state = state();
        state.settings.behavior.browser = "ptable-test-browser-that-does-not-exist".to_string();

        process_message(&mut state, Message::OpenFocusedLink, &tx);

        let msg = tokio::time::timeout(std::time::Duration::from_secs(5), rx.recv())
            .await
            .unwrap();
        assert!(matches!(msg, Some(Message::LinkOpenFailed { .. })));
    }
}
