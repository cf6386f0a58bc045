//! Create a thread

use std::sync::Arc;

use forum_core::entities::{AddedThread, NewThread};
use forum_core::error::DomainResult;
use forum_core::traits::ThreadRepository;
use serde_json::Value;
use tracing::{info, instrument};

pub struct AddThreadUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
}

impl AddThreadUseCase {
    pub fn new(thread_repository: Arc<dyn ThreadRepository>) -> Self {
        Self { thread_repository }
    }

    #[instrument(skip(self, payload))]
    pub async fn execute(&self, payload: &Value, owner: &str) -> DomainResult<AddedThread> {
        let new_thread = NewThread::new(payload)?;

        let added = self.thread_repository.add_thread(&new_thread, owner).await?;

        info!(thread_id = %added.id(), owner = %owner, "Thread created");
        Ok(added)
    }
}
