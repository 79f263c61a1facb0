use async_trait::async_trait;
use org_license_audit::prelude::*;
use std::sync::Mutex;

/// Mock Notifier recording sent notifications
pub struct MockNotifier {
    notes: Mutex<Vec<String>>,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self {
            notes: Mutex::new(Vec::new()),
        }
    }

    pub fn notes(&self) -> Vec<String> {
        self.notes.lock().unwrap().clone()
    }
}

impl Default for MockNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    async fn notify(&self, text: &str) -> Result<()> {
        self.notes.lock().unwrap().push(text.to_string());
        Ok(())
    }
}
