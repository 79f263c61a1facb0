use async_trait::async_trait;
use org_license_audit::prelude::*;
use std::sync::Mutex;

/// Mock ReportSink recording published report bodies
pub struct MockReportSink {
    previous: Option<String>,
    published: Mutex<Vec<String>>,
}

impl MockReportSink {
    pub fn new(previous: Option<&str>) -> Self {
        Self {
            previous: previous.map(String::from),
            published: Mutex::new(Vec::new()),
        }
    }

    pub fn published(&self) -> Vec<String> {
        self.published.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReportSink for MockReportSink {
    async fn previous_report(&self) -> Result<Option<String>> {
        Ok(self.previous.clone())
    }

    async fn publish(&self, body: &str) -> Result<()> {
        self.published.lock().unwrap().push(body.to_string());
        Ok(())
    }
}
