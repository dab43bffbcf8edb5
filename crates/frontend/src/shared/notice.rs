//! Transient status messages shown at the top of a screen

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Warning,
    Processing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Warning, message)
    }

    pub fn processing(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Processing, message)
    }

    /// Processing notices stay until replaced; the rest dismiss themselves
    pub fn auto_dismiss(&self) -> bool {
        self.kind != NoticeKind::Processing
    }

    pub fn css_class(&self) -> &'static str {
        match self.kind {
            NoticeKind::Success => "alert alert--success",
            NoticeKind::Error => "alert alert--error",
            NoticeKind::Warning => "alert alert--warning",
            NoticeKind::Processing => "alert alert--info",
        }
    }
}
