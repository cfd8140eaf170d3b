pub mod common;

pub mod feedbacks;

pub mod mail;

pub use common::request::Request;
pub use common::response::Response;
