use std::sync::Arc;

use teloxide::{prelude::*, types::Message};

use fab_core::{
    fitness::{compute, parse_fitness_args},
    formatting,
};

use crate::handlers::send_reply;
use crate::router::AppState;

fn parse_command(text: &str) -> (String, String) {
    // Telegram may send `/cmd@botname arg1 ...`
    let mut parts = text.trim().splitn(2, char::is_whitespace);
    let first = parts.next().unwrap_or("").trim();
    let rest = parts.next().unwrap_or("").trim().to_string();

    let cmd = first
        .trim_start_matches('/')
        .split('@')
        .next()
        .unwrap_or("")
        .to_lowercase();

    (cmd, rest)
}

pub async fn handle_command(msg: &Message, text: &str, state: Arc<AppState>) -> ResponseResult<()> {
    let (cmd, args) = parse_command(text);
    let chat_id = msg.chat.id.0;

    match cmd.as_str() {
        "start" => {
            let first_name = msg.from().map(|u| u.first_name.as_str());
            send_reply(&state, chat_id, &formatting::start_text(first_name)).await;
        }
        "help" => {
            send_reply(&state, chat_id, &formatting::help_text()).await;
        }
        "fitnessage" => {
            let reply = match parse_fitness_args(&args) {
                Ok(input) => formatting::result_text(&input, &compute(&input)),
                Err(e) => formatting::args_error_text(&e),
            };
            send_reply(&state, chat_id, &reply).await;
        }
        // Unregistered commands get no reply.
        _ => {}
    }

    Ok(())
}
