//! 日志输出抽象接口

use tracing::warn;

/// 日志接收者 trait
///
/// 接收一个标签和一条消息。
pub trait LogSink: Send + Sync {
    /// 输出警告日志
    fn warn(&self, tag: &str, message: &str);
}

/// 基于 tracing 的日志接收者
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogSink;

impl LogSink for TracingLogSink {
    fn warn(&self, tag: &str, message: &str) {
        warn!(tag = %tag, "{}", message);
    }
}
