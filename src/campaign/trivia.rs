//! Between-battle knowledge checks.

use crate::core::constants::TRIVIA_DISTINCT_LEVELS;
use crate::core::error::Result;

/// Asks the level's question and reports whether it was answered correctly.
pub trait Trivia {
    fn quiz(&mut self, level: u32) -> Result<bool>;
}

/// A two-option question; answers are `A` or `B`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriviaQuestion {
    pub prompt: &'static str,
    pub option_a: &'static str,
    pub option_b: &'static str,
    pub answer: char,
}

impl TriviaQuestion {
    /// Compares a typed answer, ignoring surrounding whitespace and case.
    pub fn is_correct(&self, response: &str) -> bool {
        let mut chars = response.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c.eq_ignore_ascii_case(&self.answer),
            _ => false,
        }
    }
}

const fn question(
    prompt: &'static str,
    option_a: &'static str,
    option_b: &'static str,
    answer: char,
) -> TriviaQuestion {
    TriviaQuestion {
        prompt,
        option_a,
        option_b,
        answer,
    }
}

/// One question per level for levels 1..=14, in order.
static QUESTION_BANK: [TriviaQuestion; TRIVIA_DISTINCT_LEVELS as usize] = [
    question(
        "Which OOP principle hides the internal implementation details from the user?",
        "Abstraction",
        "Inheritance",
        'A',
    ),
    question(
        "What keyword is necessary to create a custom exception class in Java?",
        "throws",
        "extends",
        'B',
    ),
    question(
        "If a parent class reference holds an object of a subclass \
         (e.g., AbstractCharacter c = new Knight()), what is this dynamic behavior called?",
        "Polymorphism",
        "Encapsulation",
        'A',
    ),
    question(
        "What is the standard naming convention for Java variables?",
        "PascalCase",
        "camelCase",
        'B',
    ),
    question(
        "Which access modifier allows access only within the same class?",
        "default",
        "private",
        'B',
    ),
    question(
        "Which block is used to ensure a cleanup code runs whether an exception occurs or not?",
        "finally",
        "catch",
        'A',
    ),
    question("Can a class implement multiple interfaces in Java?", "Yes", "No", 'A'),
    question(
        "What does the 'super' keyword refer to in a constructor?",
        "The subclass",
        "The superclass",
        'B',
    ),
    question(
        "Which type of polymorphism is achieved at runtime through method overriding?",
        "Compile-time",
        "Run-time",
        'B',
    ),
    question(
        "What must a concrete subclass do if it extends an abstract class?",
        "Define all abstract methods",
        "Define only abstract classes",
        'A',
    ),
    question("In Java, arrays are objects.", "True", "False", 'A'),
    question(
        "Which OOP principle ensures that fields are kept private and accessed only \
         through public methods (getters/setters)?",
        "Encapsulation",
        "Abstraction",
        'A',
    ),
    question(
        "What kind of block is used to handle checked exceptions in Java?",
        "try-catch",
        "if-else",
        'A',
    ),
    question("Is a Java interface required to define constructors?", "Yes", "No", 'B'),
];

static FALLBACK_QUESTION: TriviaQuestion = question(
    "Who prepared the CS 211 Final Project Guidelines?",
    "Ms. Fatima Marie P. Agdon",
    "Demon King Chaus",
    'A',
);

/// The question for `level`; levels outside 1..=14 get the fallback.
pub fn question_for_level(level: u32) -> &'static TriviaQuestion {
    match level {
        1..=TRIVIA_DISTINCT_LEVELS => &QUESTION_BANK[(level - 1) as usize],
        _ => &FALLBACK_QUESTION,
    }
}
