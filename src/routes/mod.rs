pub mod feedbacks;

pub mod mail;

pub mod pages;

pub use feedbacks::configure_feedback_routes;
pub use mail::configure_mail_routes;
pub use pages::configure_page_routes;
