pub mod flow;
pub mod tasks;
pub mod time;
