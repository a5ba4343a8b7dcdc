//! # Trivia Command
//!
//! Handles `start quiz` (experimental): emits a random question from the
//! fixed seed set. Answers are not checked anywhere.

use crate::application::trivia;
use crate::domain::error::BotError;
use crate::strings::messages;

pub fn handle() -> Result<String, BotError> {
    let picked = trivia::pick_question();
    Ok(messages::quiz_question(picked.question))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_contains_a_seed_question() {
        let reply = handle().unwrap();
        assert!(
            trivia::QUESTIONS
                .iter()
                .any(|q| reply == format!("Quiz: {}", q.question))
        );
    }
}
