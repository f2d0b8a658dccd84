use serde::{Deserialize, Serialize};

use crate::models::QuestionRecord;

/// 答案置信度
///
/// 粗粒度的来源质量标签，并非校准过的概率
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

/// 单题解答结果
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// 已解出
    ///
    /// `answer` 必须等于原题某个选项的 `position`
    Solved {
        answer: String,
        confidence: Confidence,
        source: String,
    },
    /// 三层全部失败
    Failed { message: String },
}

/// 单条报告状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    /// 成功解出
    Success,
    /// 所有解答层都失败
    Failed,
    /// 输入缺失，未进入解答流程
    Error,
}

/// 单题处理报告
///
/// 与输入记录一一对应，顺序一致
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchItemReport {
    pub question_index: i64,
    /// 题干回显（成功/失败时按配置截断）
    pub question: String,
    pub status: ItemStatus,
    /// 选中的选项编号，未解出时为 "-"
    pub answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<Confidence>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solved: Option<bool>,
}

impl BatchItemReport {
    /// 成功报告
    pub fn success(
        index: i64,
        question_preview: String,
        answer: String,
        confidence: Confidence,
        source: String,
    ) -> Self {
        Self {
            question_index: index,
            question: question_preview,
            status: ItemStatus::Success,
            answer,
            message: None,
            confidence: Some(confidence),
            source: Some(source),
            solved: Some(true),
        }
    }

    /// 失败报告（三层全部未解出）
    pub fn failed(index: i64, question_preview: String, message: String) -> Self {
        Self {
            question_index: index,
            question: question_preview,
            status: ItemStatus::Failed,
            answer: "-".to_string(),
            message: Some(message),
            confidence: None,
            source: None,
            solved: Some(false),
        }
    }

    /// 输入缺失报告（未进入解答流程，题干原样回显）
    pub fn input_error(record: &QuestionRecord, message: &str) -> Self {
        Self {
            question_index: record.index,
            question: record.question.clone(),
            status: ItemStatus::Error,
            answer: "-".to_string(),
            message: Some(message.to_string()),
            confidence: None,
            source: None,
            solved: None,
        }
    }
}

/// 批量解答响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveReply {
    pub status: String,
    pub total_questions: usize,
    pub solved_count: usize,
    /// 解出占比，固定一位小数，如 "66.7%"
    pub success_rate: String,
    pub solutions: Vec<BatchItemReport>,
}

impl SolveReply {
    /// 汇总一批报告
    pub fn from_reports(reports: Vec<BatchItemReport>) -> Self {
        let total = reports.len();
        let solved = reports.iter().filter(|r| r.solved == Some(true)).count();
        let rate = if total == 0 {
            0.0
        } else {
            solved as f64 / total as f64 * 100.0
        };

        Self {
            status: "completed".to_string(),
            total_questions: total,
            solved_count: solved,
            success_rate: format!("{:.1}%", rate),
            solutions: reports,
        }
    }
}
