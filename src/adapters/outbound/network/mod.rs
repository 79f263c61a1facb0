pub mod caching_npm_client;
pub mod github_client;
pub mod github_issue_sink;
pub mod npm_client;
pub mod webhook_notifier;

pub use caching_npm_client::CachingLicenseRepository;
pub use github_client::GithubGraphSource;
pub use github_issue_sink::GithubIssueSink;
pub use npm_client::NpmLicenseRepository;
pub use webhook_notifier::WebhookNotifier;
