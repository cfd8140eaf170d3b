pub mod entities;

pub use entities::{EmailDetails, EmailOptions, ExamFeedbackContext, ExerciseFeedbackContext};
