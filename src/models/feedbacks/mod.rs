pub mod entities;

pub use entities::{Assignment, Exercise, Feedback, Identified, NotionConfig, Teacher};
