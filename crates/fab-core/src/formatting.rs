//! Reply texts (Telegram HTML parse mode).

use crate::fitness::{FitnessAgeResult, FitnessArgsError, FitnessInput, StatusBand};

/// Canonical worked example, repeated in every guidance message.
pub const EXAMPLE_INVOCATION: &str = "/fitnessage 100 30.5 12 25.0 8.5 1";

/// Escape HTML special characters for Telegram HTML parse mode.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

pub fn start_text(first_name: Option<&str>) -> String {
    let greeting = match first_name {
        Some(name) => format!("Hi {}! 👋", escape_html(name)),
        None => "Hi! 👋".to_string(),
    };

    format!(
        "{greeting}\n\n\
         🤖 Fitness Age calculator bot\n\n\
         Commands:\n\
         /start - show this message\n\
         /help - full usage guide\n\
         /fitnessage [parameters] - calculate your fitness age\n\n\
         Example:\n\
         <code>{EXAMPLE_INVOCATION}</code>"
    )
}

/// Also the reply for any plain (non-command) text.
pub fn help_text() -> String {
    format!(
        "📚 Usage:\n\n\
         1. Required parameters, in order:\n   \
         - steps completed in 2 minutes\n   \
         - hand grip strength (kg)\n   \
         - chair stands in 30 seconds\n   \
         - sit-and-reach flexibility (cm)\n   \
         - TUG test time (seconds)\n   \
         - sex (1=male, 2=female)\n\n\
         2. Full example:\n\
         <code>{EXAMPLE_INVOCATION}</code>"
    )
}

pub fn status_label(band: StatusBand) -> &'static str {
    match band {
        StatusBand::Excellent => "✅ Excellent! Better than your age average",
        StatusBand::Normal => "👍 Normal! Within the expected range",
        StatusBand::NeedsImprovement => "💡 Needs improvement! Consider consulting a physician",
    }
}

pub fn result_text(input: &FitnessInput, result: &FitnessAgeResult) -> String {
    format!(
        "🎯 Results:\n\n\
         • Fitness age: <b>{age:.1} years</b>\n\
         • Status: {status}\n\n\
         📊 Your inputs:\n\
         - Step test: {step}\n\
         - Grip strength: {grip} kg\n\
         - Chair stands: {chair}\n\
         - Sit-and-reach: {reach} cm\n\
         - TUG time: {tug} s\n\
         - Sex: {sex}",
        age = result.fitness_age,
        status = status_label(result.status),
        step = input.step_test_count,
        grip = input.grip_strength_kg,
        chair = input.chair_stand_count,
        reach = input.sit_reach_cm,
        tug = input.tug_seconds,
        sex = input.sex.label(),
    )
}

pub fn args_error_text(err: &FitnessArgsError) -> String {
    match err {
        FitnessArgsError::ArgumentCount(_) => format!(
            "⚠️ Wrong number of parameters!\n\n\
             Expected:\n\
             <code>/fitnessage steps grip chair_stands reach tug sex</code>\n\n\
             Example:\n\
             <code>{EXAMPLE_INVOCATION}</code>"
        ),
        FitnessArgsError::ArgumentType { .. } => format!(
            "⚠️ Could not read the parameters!\n\n\
             Please check that:\n\
             - every parameter is a number\n\
             - the order matches the format\n\n\
             Example:\n\
             <code>{EXAMPLE_INVOCATION}</code>"
        ),
        FitnessArgsError::InvalidSex(_) => format!(
            "⚠️ Sex must be 1 (male) or 2 (female)\n\n\
             Example:\n\
             <code>{EXAMPLE_INVOCATION}</code>"
        ),
    }
}
