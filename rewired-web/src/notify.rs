//! Global notice queue behind the toast overlay.
//!
//! Any component (and plain async code outside the tree) can push a notice;
//! the overlay in `components::notices` renders whatever is in the store.
//! Notices dismiss themselves after a few seconds, errors a little later.

use gloo_timers::callback::Timeout;
use yewdux::prelude::*;

const DISMISS_MS: u32 = 4_500;
const ERROR_DISMISS_MS: u32 = 8_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
    Info,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct NoticeStore {
    next_id: u64,
    pub notices: Vec<Notice>,
}

impl NoticeStore {
    /// Queue a notice and return its id for later dismissal.
    pub fn push(&mut self, level: NoticeLevel, message: String) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.notices.push(Notice { id, level, message });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.notices.retain(|notice| notice.id != id);
    }
}

pub fn success(message: impl Into<String>) {
    publish(NoticeLevel::Success, message.into(), DISMISS_MS);
}

pub fn error(message: impl Into<String>) {
    publish(NoticeLevel::Error, message.into(), ERROR_DISMISS_MS);
}

pub fn info(message: impl Into<String>) {
    publish(NoticeLevel::Info, message.into(), DISMISS_MS);
}

pub fn dismiss(id: u64) {
    Dispatch::<NoticeStore>::global().reduce_mut(|store| store.dismiss(id));
}

fn publish(level: NoticeLevel, message: String, dismiss_after_ms: u32) {
    let dispatch = Dispatch::<NoticeStore>::global();
    let mut id = 0;
    dispatch.reduce_mut(|store| id = store.push(level, message));
    Timeout::new(dismiss_after_ms, move || dismiss(id)).forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_increasing_ids() {
        let mut store = NoticeStore::default();
        let first = store.push(NoticeLevel::Info, "first".into());
        let second = store.push(NoticeLevel::Error, "second".into());

        assert!(second > first);
        assert_eq!(store.notices.len(), 2);
    }

    #[test]
    fn dismiss_removes_only_the_matching_notice() {
        let mut store = NoticeStore::default();
        let keep = store.push(NoticeLevel::Success, "saved".into());
        let drop = store.push(NoticeLevel::Info, "heads up".into());

        store.dismiss(drop);

        assert_eq!(store.notices.len(), 1);
        assert_eq!(store.notices[0].id, keep);
        assert_eq!(store.notices[0].message, "saved");
    }

    #[test]
    fn dismissing_an_unknown_id_is_harmless() {
        let mut store = NoticeStore::default();
        store.push(NoticeLevel::Info, "only one".into());

        store.dismiss(999);

        assert_eq!(store.notices.len(), 1);
    }
}
