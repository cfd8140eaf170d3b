pub mod api;
pub mod assigner;
pub mod mailer;

pub use api::Api;
pub use assigner::Assigner;
pub use mailer::Mailer;
