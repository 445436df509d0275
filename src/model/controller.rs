//! 任务列表控制器
//!
//! 持有唯一的任务列表和待提交输入，是修改任务状态的唯一入口。
//! 所有操作都是同步、全函数：要么立即生效，要么是 no-op，不会返回错误。
//! 渲染层每帧通过只读方法拉取快照。

use tracing::{debug, trace};

use super::task::{Task, TaskId};

/// 任务列表控制器
#[derive(Debug)]
pub struct TaskListController {
    /// 按插入顺序排列的任务
    tasks: Vec<Task>,
    /// 尚未提交的输入内容
    pending: String,
    /// 下一个可分配的 ID（只增不减）
    next_id: u64,
}

impl Default for TaskListController {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskListController {
    /// 创建空控制器
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            pending: String::new(),
            next_id: 1,
        }
    }

    // ========== 写操作 ==========

    /// 无条件替换待提交输入
    pub fn set_pending_text(&mut self, text: impl Into<String>) {
        self.pending = text.into();
    }

    /// 把待提交输入转为新任务
    ///
    /// 输入去掉首尾空白后为空时什么也不做，输入保持原样，返回 `None`。
    /// 否则以原始（未 trim）文本追加到列表末尾，清空输入并返回新 ID。
    pub fn submit_pending(&mut self) -> Option<TaskId> {
        if self.pending.trim().is_empty() {
            trace!(len = self.pending.len(), "ignored blank submission");
            return None;
        }

        let id = self.mint_id();
        let text = std::mem::take(&mut self.pending);
        debug!(%id, text = %text, "task added");
        self.tasks.push(Task::new(id, text));
        Some(id)
    }

    /// 切换任务完成状态，返回是否找到该任务
    pub fn toggle_completed(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|t| t.id() == id) {
            Some(task) => {
                task.toggle();
                debug!(%id, completed = task.is_completed(), "task toggled");
                true
            }
            None => {
                trace!(%id, "toggle ignored: no such task");
                false
            }
        }
    }

    /// 删除任务（保持其余任务的相对顺序），返回是否删除成功
    pub fn remove(&mut self, id: TaskId) -> bool {
        match self.position(id) {
            Some(index) => {
                let task = self.tasks.remove(index);
                debug!(%id, text = %task.text(), "task removed");
                true
            }
            None => {
                trace!(%id, "remove ignored: no such task");
                false
            }
        }
    }

    // ========== 只读查询 ==========

    /// 当前任务快照（插入顺序）
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// 当前待提交输入
    pub fn pending_text(&self) -> &str {
        &self.pending
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id() == id)
    }

    /// 任务在列表中的下标
    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id() == id)
    }

    pub fn count(&self) -> usize {
        self.tasks.len()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.is_completed()).count()
    }

    pub fn remaining_count(&self) -> usize {
        self.count() - self.completed_count()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    fn mint_id(&mut self) -> TaskId {
        let id = TaskId::new(self.next_id);
        self.next_id += 1;
        id
    }
}

// ============================================================================
// Tests
// ============================================================================
