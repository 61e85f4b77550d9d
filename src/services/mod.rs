pub mod search_session;
pub mod slide_lookup;
pub mod upload_job;
