use std::fmt;

/// 任务 ID
///
/// 由 [`TaskListController`](super::TaskListController) 的递增计数器分配，
/// 在控制器生命周期内不会重复（删除后也不会复用）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

impl TaskId {
    pub(super) fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 单条待办
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    /// 创建后不可修改，没有就地编辑操作
    text: String,
    completed: bool,
}

impl Task {
    pub(super) fn new(id: TaskId, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// 复选框图标
    pub fn checkbox(&self) -> &'static str {
        if self.completed {
            "[x]"
        } else {
            "[ ]"
        }
    }

    pub(super) fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}
