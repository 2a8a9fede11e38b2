pub mod request;
pub mod response;

pub use request::{AnswerItem, GenerateQuizRequest, SubmitQuizRequest};
pub use response::{GenerateQuizResponse, PublicQuestion, QuestionResult, SubmitQuizResponse};
