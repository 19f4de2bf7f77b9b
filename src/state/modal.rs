/// Modal viewer state
///
/// Closed --open(r)--> Open(r) --close--> Closed, and Open(a) --open(b)-->
/// Open(b) without passing through Closed. While open, background scrolling
/// is suppressed; the lock is a single flag so re-opening never stacks it.

use super::data::ImageRecord;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Modal {
    #[default]
    Closed,
    Open(ImageRecord),
}

impl Modal {
    pub fn open(&mut self, record: ImageRecord) {
        *self = Modal::Open(record);
    }

    /// Returns true if the modal was open
    pub fn close(&mut self) -> bool {
        matches!(std::mem::take(self), Modal::Open(_))
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Modal::Open(_))
    }

    pub fn record(&self) -> Option<&ImageRecord> {
        match self {
            Modal::Open(record) => Some(record),
            Modal::Closed => None,
        }
    }

    /// Whether the grid behind the modal must ignore scroll input
    pub fn suppresses_background_scroll(&self) -> bool {
        self.is_open()
    }
}
