//! # Trivia
//!
//! The fixed trivia seed set and random selection. Only the question text is
//! ever sent; answers are kept alongside but never verified (there is no
//! state recording which question was asked to whom).

use rand::seq::SliceRandom;

use crate::domain::types::TriviaQuestion;

pub const QUESTIONS: &[TriviaQuestion] = &[
    TriviaQuestion {
        question: "Was ist die Hauptstadt von Frankreich?",
        answer: "Paris",
    },
    TriviaQuestion {
        question: "Welcher Planet ist der größte im Sonnensystem?",
        answer: "Jupiter",
    },
    TriviaQuestion {
        question: "Wer schrieb 'Sein oder Nichtsein'?",
        answer: "Shakespeare",
    },
];

/// Picks one question uniformly at random from the seed set.
pub fn pick_question() -> TriviaQuestion {
    // The seed set is non-empty by construction.
    *QUESTIONS.choose(&mut rand::thread_rng()).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picked_question_comes_from_seed_set() {
        for _ in 0..20 {
            let picked = pick_question();
            assert!(QUESTIONS.contains(&picked));
        }
    }
}
