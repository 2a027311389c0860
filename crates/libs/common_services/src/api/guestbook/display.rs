use crate::api::guestbook::error::GuestbookError;
use crate::api::guestbook::interfaces::GuestbookCard;
use crate::database::MessageStore;
use crate::database::tables::message::Message;
use rotation::{GuestbookRotator, shuffle_in_place};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::info;

/// The rotating public guestbook: a shuffled snapshot of approved, visible
/// messages plus the fade/advance rotator over it.
pub struct GuestbookDisplay {
    pool: PgPool,
    messages: RwLock<Arc<Vec<Message>>>,
    rotator: GuestbookRotator,
}

impl GuestbookDisplay {
    /// Must be called within a tokio runtime (the rotator starts its loop).
    #[must_use]
    pub fn new(pool: PgPool, display: Duration, fade: Duration) -> Self {
        Self {
            pool,
            messages: RwLock::new(Arc::new(Vec::new())),
            rotator: GuestbookRotator::new(0, display, fade),
        }
    }

    /// Reloads the eligible messages and re-rolls the shuffle, restarting
    /// the rotation from the first card.
    pub async fn reload(&self) -> Result<usize, GuestbookError> {
        let mut messages = MessageStore::list_public(&self.pool).await?;
        shuffle_in_place(&mut messages);
        let count = messages.len();
        *self.messages.write().await = Arc::new(messages);
        self.rotator.set_len(count);
        info!(count, "guestbook rotation reloaded");
        Ok(count)
    }

    /// The card currently shown, if any message is eligible.
    pub async fn current_card(&self) -> GuestbookCard {
        let state = self.rotator.current();
        let messages = self.messages.read().await;
        GuestbookCard {
            message: messages.get(state.current_index).cloned(),
            visible: state.visible,
            current_index: state.current_index,
            total: messages.len(),
        }
    }

    pub fn shutdown(&self) {
        self.rotator.shutdown();
    }
}
