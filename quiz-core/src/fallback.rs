//! Built-in questions served when live generation is unavailable.

use quiz_types::{GameType, Question};

fn choice(
    id: &str,
    category: GameType,
    prompt: &str,
    options: [&str; 4],
    correct_answer: &str,
    explanation: &str,
) -> Question {
    Question {
        id: id.to_string(),
        category,
        prompt: prompt.to_string(),
        options: options.iter().map(|option| option.to_string()).collect(),
        correct_answer: correct_answer.to_string(),
        explanation: explanation.to_string(),
    }
}

fn word(id: &str, category: GameType, word: &str, explanation: &str) -> Question {
    Question {
        id: id.to_string(),
        category,
        prompt: word.to_string(),
        options: Vec::new(),
        correct_answer: word.to_string(),
        explanation: explanation.to_string(),
    }
}

/// Fallback sequence for `category`: one item for the multiple-choice games,
/// two words for typing and hangman
pub fn questions(category: GameType) -> Vec<Question> {
    match category {
        GameType::Quiz => vec![choice(
            "q1",
            GameType::Quiz,
            "Op welke datum begint het carnavalsseizoen officieel?",
            ["1 januari", "11 november", "25 december", "1 april"],
            "11 november",
            "Het seizoen begint op de 11e van de 11e om 11:11 uur, omdat 11 het 'gekkengetal' is.",
        )],
        GameType::Math => vec![choice(
            "f1",
            GameType::Math,
            "Een praalwagen is 12 meter lang. Voor de decoratie is 25% van de wagen bedekt met bloemen. Hoeveel meter is dat?",
            ["2 meter", "3 meter", "4 meter", "6 meter"],
            "3 meter",
            "25% is een kwart. 12 gedeeld door 4 is 3 meter.",
        )],
        GameType::Language => vec![choice(
            "f2",
            GameType::Language,
            "Wat is het meervoud van 'dweilorkest'?",
            ["dweilorkesten", "dweilorkestjes", "dweilorkests", "dweilorkesters"],
            "dweilorkesten",
            "Het meervoud van orkest is orkesten, dus dweilorkesten.",
        )],
        GameType::Typing | GameType::Hangman => vec![
            word("t1", category, "Polonaise", "Gezellig achter elkaar aan lopen!"),
            word("t2", category, "Dweilorkest", "Muziek die door de straten dweilt."),
        ],
    }
}
