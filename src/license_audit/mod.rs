//! License audit bounded context: domain model and pure services.

pub mod domain;
pub mod services;
