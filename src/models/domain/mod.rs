pub mod question;
pub mod quiz;

pub use question::{Difficulty, Question};
pub use quiz::QuizRecord;
