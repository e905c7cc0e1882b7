pub mod progress;
pub mod question;

pub use progress::Progress;
pub use question::{MissedQuestion, Question, QuestionId};
