use serde::{Deserialize, Serialize};

/// 答案选项
///
/// `position` 是选项的编号标识（如 "1".."5"），在一道题内唯一；
/// `text` 是选项的展示文本。构造后不再修改
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerOption {
    pub position: String,
    pub text: String,
}

/// 来自调用方的原始题目记录
///
/// 调用方不可信：任何字段都可能缺失，缺失时取默认值，
/// 由批处理逐条校验，单条坏数据只降级该条的报告
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionRecord {
    /// 调用方提供的序号，用于结果与输入的对应
    #[serde(default)]
    pub index: i64,
    /// 题干
    #[serde(default)]
    pub question: String,
    /// 选项列表（保持输入顺序）
    #[serde(default)]
    pub answers: Vec<AnswerOption>,
}

impl QuestionRecord {
    /// 题干或选项缺失的记录不进入解答流程
    pub fn is_incomplete(&self) -> bool {
        self.question.is_empty() || self.answers.is_empty()
    }
}
