//! Bounded notice queue.

use std::collections::VecDeque;

use vacuum_core::{CommandSeq, Notice, NotificationSink};

/// Default [`NotificationSink`]: keeps the newest `capacity` notices.
///
/// Older notices are dropped first, the way a snackbar stack only shows
/// the last few messages.
///
/// # Examples
///
/// ```
/// use vacuum_core::{CommandSeq, Notice, NotificationSink};
/// use vacuum_engine::NoticeQueue;
///
/// let mut q = NoticeQueue::new(2);
/// for i in 0..3 {
///     q.notify(Notice { seq: CommandSeq(i), message: format!("n{i}") });
/// }
/// let kept: Vec<_> = q.iter().map(|n| n.message.as_str()).collect();
/// assert_eq!(kept, ["n1", "n2"]);
/// ```
#[derive(Clone, Debug)]
pub struct NoticeQueue {
    notices: VecDeque<Notice>,
    capacity: usize,
    dropped: u64,
}

impl NoticeQueue {
    /// A queue holding at most `capacity` notices (at least one).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            notices: VecDeque::with_capacity(capacity),
            capacity,
            dropped: 0,
        }
    }

    /// Maximum number of notices kept.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Kept notices, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.notices.iter()
    }

    /// The newest notice.
    pub fn latest(&self) -> Option<&Notice> {
        self.notices.back()
    }

    /// Number of kept notices.
    pub fn len(&self) -> usize {
        self.notices.len()
    }

    /// Whether no notice is kept.
    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    /// Number of notices evicted to make room so far.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    /// Remove the notice raised by `seq`. Returns whether it was present.
    pub fn dismiss(&mut self, seq: CommandSeq) -> bool {
        let before = self.notices.len();
        self.notices.retain(|n| n.seq != seq);
        self.notices.len() != before
    }

    /// Remove every notice.
    pub fn clear(&mut self) {
        self.notices.clear();
    }
}

impl Default for NoticeQueue {
    fn default() -> Self {
        Self::new(2)
    }
}

impl NotificationSink for NoticeQueue {
    fn notify(&mut self, notice: Notice) {
        if self.notices.len() == self.capacity {
            self.notices.pop_front();
            self.dropped += 1;
        }
        self.notices.push_back(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notice(seq: u64) -> Notice {
        Notice {
            seq: CommandSeq(seq),
            message: format!("notice {seq}"),
        }
    }

    #[test]
    fn evicts_oldest_first() {
        let mut q = NoticeQueue::default();
        assert_eq!(q.capacity(), 2);
        q.notify(notice(0));
        q.notify(notice(1));
        q.notify(notice(2));
        assert_eq!(q.len(), 2);
        assert_eq!(q.dropped(), 1);
        assert_eq!(q.iter().next().map(|n| n.seq), Some(CommandSeq(1)));
        assert_eq!(q.latest().map(|n| n.seq), Some(CommandSeq(2)));
    }

    #[test]
    fn zero_capacity_is_raised_to_one() {
        let mut q = NoticeQueue::new(0);
        q.notify(notice(5));
        q.notify(notice(6));
        assert_eq!(q.len(), 1);
        assert_eq!(q.latest(), Some(&notice(6)));
    }

    #[test]
    fn dismiss_by_seq() {
        let mut q = NoticeQueue::new(3);
        q.notify(notice(1));
        q.notify(notice(2));
        assert!(q.dismiss(CommandSeq(1)));
        assert!(!q.dismiss(CommandSeq(1)));
        assert_eq!(q.len(), 1);
        q.clear();
        assert!(q.is_empty());
    }
}
