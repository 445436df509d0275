pub mod controller;
pub mod task;

pub use controller::TaskListController;
pub use task::{Task, TaskId};
