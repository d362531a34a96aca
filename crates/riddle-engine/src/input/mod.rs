pub mod queue;
pub mod source;
