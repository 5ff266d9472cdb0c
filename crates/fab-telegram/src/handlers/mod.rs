//! Telegram update handlers.
//!
//! One entry point for messages: commands go to the command dispatch, any
//! other text gets the help reply, non-text updates are ignored.

use std::sync::Arc;

use teloxide::{prelude::*, types::Message};

use fab_core::{domain::ChatId, formatting};

use crate::router::AppState;

mod commands;

pub async fn handle_message(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let Some(text) = msg.text().map(|s| s.to_string()) else {
        return Ok(());
    };

    if text.starts_with('/') {
        return commands::handle_command(&msg, &text, state).await;
    }

    // Plain text gets the same reply as /help.
    send_reply(&state, msg.chat.id.0, &formatting::help_text()).await;
    Ok(())
}

/// Send failures are operator-visible, never user-visible or fatal.
pub(crate) async fn send_reply(state: &AppState, chat_id: i64, html: &str) {
    if let Err(e) = state.messenger.send_html(ChatId(chat_id), html).await {
        eprintln!("Failed to send reply to chat {chat_id}: {e}");
    }
}
