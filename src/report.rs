//! 校验错误翻译：把查询引擎的校验失败转成结构化结果。

/// 校验类失败的种类标签。
pub const VALIDATION_KIND: &str = "ValidationError";

/// 查询引擎错误的最小视图：种类标签加字段级消息列表。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineError {
    pub kind: String,
    pub messages: Vec<String>,
}

/// 整体翻译结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub success: bool,
    pub message: String,
    pub subresults: Vec<SubReport>,
}

/// 字段级子结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubReport {
    pub success: bool,
    pub message: String,
}

impl EngineError {
    pub fn new(kind: impl Into<String>, messages: Vec<String>) -> Self {
        Self {
            kind: kind.into(),
            messages,
        }
    }

    pub fn is_validation_error(&self) -> bool {
        self.kind == VALIDATION_KIND
    }

    /// 校验类错误翻译为结构化报告；其他种类返回 `None`，表示本翻译器
    /// 不适用，由调用方自行处理。
    pub fn validation_report(&self, global_message: &str) -> Option<Report> {
        if !self.is_validation_error() {
            return None;
        }
        Some(Report {
            success: false,
            message: global_message.to_string(),
            subresults: self
                .messages
                .iter()
                .map(|message| SubReport {
                    success: false,
                    message: message.clone(),
                })
                .collect(),
        })
    }
}
