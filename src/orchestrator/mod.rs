//! 编排层
//!
//! 批量题目的遍历与结果汇总

pub mod batch_processor;

pub use batch_processor::BatchProcessor;
