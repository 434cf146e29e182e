use chrono::{DateTime, Utc};
use std::collections::VecDeque;

use crate::error::Failure;

/// How many notices we keep around for the UI
const MAX_NOTICES: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    LoadFailure,
    SaveFailure,
    UploadFailure,
    DecodeFailure,
    UnknownProject,
}

/// A transient message for the owner (rendered as a toast by the UI)
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    pub at: DateTime<Utc>,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
            at: Utc::now(),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.kind != NoticeKind::Success
    }
}

impl From<&Failure> for Notice {
    fn from(failure: &Failure) -> Self {
        let kind = match failure {
            Failure::Load(_) => NoticeKind::LoadFailure,
            Failure::Save(_) => NoticeKind::SaveFailure,
            Failure::Upload(_) => NoticeKind::UploadFailure,
            Failure::Decode(_) => NoticeKind::DecodeFailure,
            Failure::UnknownProject(_) => NoticeKind::UnknownProject,
        };
        Self {
            kind,
            message: failure.to_string(),
            at: Utc::now(),
        }
    }
}

/// Bounded queue of notices, oldest dropped first
#[derive(Debug, Clone, Default)]
pub struct Notices {
    queue: VecDeque<Notice>,
}

impl Notices {
    pub fn push(&mut self, notice: Notice) {
        if self.queue.len() == MAX_NOTICES {
            self.queue.pop_front();
        }
        self.queue.push_back(notice);
    }

    pub fn latest(&self) -> Option<&Notice> {
        self.queue.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.queue.iter()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Dismiss everything
    pub fn clear(&mut self) {
        self.queue.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_kinds() {
        let notice = Notice::from(&Failure::Upload("HTTP 500".into()));
        assert_eq!(notice.kind, NoticeKind::UploadFailure);
        assert!(notice.is_failure());
        assert!(notice.message.contains("HTTP 500"));

        assert!(!Notice::success("saved").is_failure());
    }

    #[test]
    fn test_queue_is_bounded() {
        let mut notices = Notices::default();
        for i in 0..(MAX_NOTICES + 5) {
            notices.push(Notice::success(format!("{}", i)));
        }
        assert_eq!(notices.len(), MAX_NOTICES);
        assert_eq!(notices.iter().next().unwrap().message, "5");
        assert_eq!(notices.latest().unwrap().message, format!("{}", MAX_NOTICES + 4));
    }
}
