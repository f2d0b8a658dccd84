//! 数据模型

pub mod question;
pub mod report;

pub use question::{AnswerOption, QuestionRecord};
pub use report::{BatchItemReport, Confidence, ItemStatus, Resolution, SolveReply};
