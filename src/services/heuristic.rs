//! 本地猜测 - 业务能力层
//!
//! 不访问网络，只依据题干和选项文本做简单猜测，
//! 是回退链的最后一层：选项非空时必定给出一个答案

use crate::models::{AnswerOption, Confidence, Resolution};

/// 三层全部失败时的提示信息
const ALL_METHODS_FAILED: &str = "all methods failed";

/// 对一道题做本地猜测
///
/// - 题干含数字时：按原始顺序选第一个文本含数字的选项
/// - 否则（或没有选项含数字）：选文本最长的选项，并列取靠前的
///
/// 选项为空时返回 `Failed`，这是本层唯一的失败路径
pub fn guess(question: &str, answers: &[AnswerOption]) -> Resolution {
    if answers.is_empty() {
        return Resolution::Failed {
            message: ALL_METHODS_FAILED.to_string(),
        };
    }

    // 数学题分支：题干和选项都含数字
    if contains_digit(question) {
        if let Some(opt) = answers.iter().find(|opt| contains_digit(&opt.text)) {
            return Resolution::Solved {
                answer: opt.position.clone(),
                confidence: Confidence::Low,
                source: "heuristic-numeric".to_string(),
            };
        }
    }

    // 长度分支：严格大于保证并列时取第一个出现的
    let mut longest = &answers[0];
    for opt in &answers[1..] {
        if opt.text.chars().count() > longest.text.chars().count() {
            longest = opt;
        }
    }

    Resolution::Solved {
        answer: longest.position.clone(),
        confidence: Confidence::Low,
        source: "heuristic-longest".to_string(),
    }
}

fn contains_digit(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit())
}
