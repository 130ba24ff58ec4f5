//! Display language
//!
//! Labels for difficulty and tags, the initial notes template, and the
//! fixed user-facing strings. English and Simplified Chinese.

use crate::database::{DailyStatus, Difficulty, Problem};
use crate::error::AppError;
use crate::services::Permission;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Zh,
}

impl FromStr for Locale {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "en-us" | "english" => Ok(Locale::En),
            "zh" | "zh-cn" | "chinese" => Ok(Locale::Zh),
            other => Err(AppError::InvalidSetting(format!(
                "unknown locale '{}', expected 'en' or 'zh'",
                other
            ))),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::En => f.write_str("en"),
            Locale::Zh => f.write_str("zh"),
        }
    }
}

const TAG_NAMES_ZH: &[(&str, &str)] = &[
    ("Array", "数组"),
    ("Hash Table", "哈希表"),
    ("Linked List", "链表"),
    ("Math", "数学"),
    ("Recursion", "递归"),
    ("String", "字符串"),
    ("Sliding Window", "滑动窗口"),
    ("Binary Search", "二分查找"),
    ("Divide and Conquer", "分治"),
    ("Dynamic Programming", "动态规划"),
    ("Two Pointers", "双指针"),
    ("Greedy", "贪心"),
    ("Sorting", "排序"),
    ("Stack", "栈"),
    ("Tree", "树"),
    ("Depth-First Search", "深度优先搜索"),
    ("Breadth-First Search", "广度优先搜索"),
    ("Binary Tree", "二叉树"),
    ("Memoization", "记忆化"),
];

impl Locale {
    /// Tag label; unknown tags are shown as-is
    pub fn tag_label<'a>(&self, tag: &'a str) -> &'a str {
        match self {
            Locale::En => tag,
            Locale::Zh => TAG_NAMES_ZH
                .iter()
                .find(|(en, _)| *en == tag)
                .map(|(_, zh)| *zh)
                .unwrap_or(tag),
        }
    }

    pub fn difficulty_label(&self, difficulty: Difficulty) -> &'static str {
        match (self, difficulty) {
            (Locale::En, Difficulty::Easy) => "Easy",
            (Locale::En, Difficulty::Medium) => "Medium",
            (Locale::En, Difficulty::Hard) => "Hard",
            (Locale::Zh, Difficulty::Easy) => "简单",
            (Locale::Zh, Difficulty::Medium) => "中等",
            (Locale::Zh, Difficulty::Hard) => "困难",
        }
    }

    pub fn status_label(&self, status: DailyStatus) -> &'static str {
        match (self, status) {
            (Locale::En, DailyStatus::Todo) => "To do",
            (Locale::En, DailyStatus::Completed) => "Completed",
            (Locale::Zh, DailyStatus::Todo) => "待完成",
            (Locale::Zh, DailyStatus::Completed) => "已完成",
        }
    }

    /// Problem title, falling back to the English title when no translation is stored
    pub fn problem_title<'a>(&self, problem: &'a Problem) -> &'a str {
        match (self, problem.title_zh.as_deref()) {
            (Locale::Zh, Some(title)) => title,
            _ => &problem.title,
        }
    }

    /// Initial notes for a freshly created record
    pub fn notes_template(&self, title: &str, date: &str) -> String {
        match self {
            Locale::En => format!(
                "/**\n * Problem: {title}\n * Date: {date}\n * Tip: run `leetdaily review` when you are done to get improvement suggestions.\n */\n\nfunction solution() {{\n  // Start writing your approach here...\n}}"
            ),
            Locale::Zh => format!(
                "/**\n * 题目: {title}\n * 日期: {date}\n * 提示: 完成后记得运行 `leetdaily review` 获取改进建议。\n */\n\nfunction solution() {{\n  // 在这里开始编写你的思路...\n}}"
            ),
        }
    }

    pub fn completion_message(&self) -> &'static str {
        match self {
            Locale::En => "Congratulations! Today's challenge is complete. Keep it up! 🎉",
            Locale::Zh => "恭喜你！完成了今日挑战。继续保持！🎉",
        }
    }

    pub fn already_completed_message(&self) -> &'static str {
        match self {
            Locale::En => "Today's challenge was already marked complete.",
            Locale::Zh => "今日挑战已经完成。",
        }
    }

    pub fn reminder_title(&self) -> &'static str {
        match self {
            Locale::En => "Daily practice reminder",
            Locale::Zh => "每日刷题提醒",
        }
    }

    pub fn reminder_enabled_body(&self, time: &str) -> String {
        match self {
            Locale::En => format!("Reminders are on! I'll nudge you at {time} every day."),
            Locale::Zh => format!("提醒已开启！每天 {time} 我会准时提醒你进行算法挑战。"),
        }
    }

    // ===== Command output =====

    pub fn notes_saved(&self, date: &str, lines: usize) -> String {
        match self {
            Locale::En => format!("Saved notes for {date} ({lines} lines)."),
            Locale::Zh => format!("已保存 {date} 的笔记（{lines} 行）。"),
        }
    }

    pub fn no_history(&self) -> &'static str {
        match self {
            Locale::En => "No practice days recorded yet.",
            Locale::Zh => "还没有刷题记录。",
        }
    }

    pub fn progress_summary(&self, completed: i64, days: i64) -> String {
        match self {
            Locale::En => format!("{completed} of {days} recorded days completed."),
            Locale::Zh => format!("已记录 {days} 天，完成 {completed} 天。"),
        }
    }

    pub fn permission_label(&self, permission: Permission) -> &'static str {
        match (self, permission) {
            (Locale::En, Permission::Granted) => "granted",
            (Locale::En, Permission::Denied) => "denied",
            (Locale::En, Permission::Unsupported) => "unsupported",
            (Locale::Zh, Permission::Granted) => "已授权",
            (Locale::Zh, Permission::Denied) => "已拒绝",
            (Locale::Zh, Permission::Unsupported) => "不支持",
        }
    }

    pub fn notification_status(
        &self,
        enabled: bool,
        permission: Permission,
        time: &str,
    ) -> String {
        let permission = self.permission_label(permission);
        match self {
            Locale::En => format!(
                "Notifications: {} (permission: {permission})\nReminder time: {time} (display only)",
                if enabled { "on" } else { "off" }
            ),
            Locale::Zh => format!(
                "通知: {}（权限: {permission}）\n提醒时间: {time}（仅显示）",
                if enabled { "开启" } else { "关闭" }
            ),
        }
    }

    /// Outcome of a request to turn notifications on
    pub fn notifications_enable_result(&self, permission: Permission) -> &'static str {
        match (self, permission) {
            (Locale::En, Permission::Granted) => "Notifications enabled.",
            (Locale::En, Permission::Denied) => {
                "Notification permission denied (unset LEETDAILY_NOTIFICATIONS to allow)."
            }
            (Locale::En, Permission::Unsupported) => {
                "Notifications are not supported here (stderr is not a terminal)."
            }
            (Locale::Zh, Permission::Granted) => "通知已开启。",
            (Locale::Zh, Permission::Denied) => {
                "通知权限被拒绝（取消设置 LEETDAILY_NOTIFICATIONS 以允许通知）。"
            }
            (Locale::Zh, Permission::Unsupported) => "当前环境不支持通知（stderr 不是终端）。",
        }
    }

    pub fn notifications_disabled(&self) -> &'static str {
        match self {
            Locale::En => "Notifications disabled for this session.",
            Locale::Zh => "本次会话已关闭通知。",
        }
    }

    pub fn reminder_time_set(&self, time: &str) -> String {
        match self {
            Locale::En => format!("Reminder time set to {time}."),
            Locale::Zh => format!("提醒时间已设为 {time}。"),
        }
    }

    /// Confirmation in the newly selected language
    pub fn locale_set(&self) -> &'static str {
        match self {
            Locale::En => "Display language set to en.",
            Locale::Zh => "显示语言已设为中文。",
        }
    }
}
