//! 批量解答处理器 - 编排层
//!
//! ## 职责
//!
//! 1. **逐条校验**：题干或选项缺失的记录直接出错误报告，不进入解答流程
//! 2. **顺序处理**：按输入顺序逐题调用解答流程，一题完成再到下一题
//! 3. **结果汇总**：生成与输入一一对应的报告列表，并记录批次统计
//!
//! ## 设计特点
//!
//! - 报告顺序与输入顺序严格一致，调用方按 `index` 和位置双重对应
//! - 单条坏数据只降级该条的报告，不影响其他题目

use tracing::{info, warn};

use crate::models::{BatchItemReport, QuestionRecord, Resolution};
use crate::utils::truncate_text;
use crate::workflow::SolveFlow;

/// 输入缺失时的提示信息
const MISSING_INPUT_MESSAGE: &str = "question or answers missing";

/// 批量处理器
pub struct BatchProcessor {
    flow: SolveFlow,
    preview_len: usize,
}

impl BatchProcessor {
    /// 创建批量处理器
    ///
    /// `preview_len` 是报告中题干回显的最大字符数
    pub fn new(flow: SolveFlow, preview_len: usize) -> Self {
        Self { flow, preview_len }
    }

    /// 处理一批题目
    pub async fn process_batch(&self, records: &[QuestionRecord]) -> Vec<BatchItemReport> {
        let mut reports = Vec::with_capacity(records.len());

        for record in records {
            if record.is_incomplete() {
                warn!("[题目 {}] ⚠️ 题干或选项缺失，跳过解答", record.index);
                reports.push(BatchItemReport::input_error(record, MISSING_INPUT_MESSAGE));
                continue;
            }

            let preview = truncate_text(&record.question, self.preview_len);

            match self.flow.resolve_question(record).await {
                Resolution::Solved {
                    answer,
                    confidence,
                    source,
                } => {
                    info!(
                        "[题目 {}] ✓ 已解出: {} (来源: {})",
                        record.index, answer, source
                    );
                    reports.push(BatchItemReport::success(
                        record.index,
                        preview,
                        answer,
                        confidence,
                        source,
                    ));
                }
                Resolution::Failed { message } => {
                    warn!("[题目 {}] ❌ 解答失败: {}", record.index, message);
                    reports.push(BatchItemReport::failed(record.index, preview, message));
                }
            }
        }

        let solved = reports.iter().filter(|r| r.solved == Some(true)).count();
        info!("✓ 批次完成: 成功解出 {}/{} 题", solved, reports.len());

        reports
    }

    /// 解答流程的只读访问（用于暴露累计统计）
    pub fn flow(&self) -> &SolveFlow {
        &self.flow
    }
}
