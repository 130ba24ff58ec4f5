//! Assistance service
//!
//! On-demand review, hints and related-problem suggestions from an external
//! text generator. Results live only in the transient assistance panel and
//! are never written to the daily record store. Gateway failures become
//! fixed fallback text; the only error a caller sees is `AssistanceBusy`.

use crate::database::DailyRecord;
use crate::error::{AppError, Result};
use crate::locale::Locale;
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;

/// External text generation boundary
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// The three request shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssistanceKind {
    Review,
    Hints,
    Similar,
}

/// Lifecycle of one assistance slot
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", content = "text", rename_all = "lowercase")]
pub enum AssistanceState {
    #[default]
    Idle,
    Pending,
    Fulfilled(String),
    /// Holds the fallback text shown in place of an answer
    Failed(String),
}

impl AssistanceState {
    pub fn is_pending(&self) -> bool {
        matches!(self, AssistanceState::Pending)
    }

    /// Text to display, if the slot has settled
    pub fn text(&self) -> Option<&str> {
        match self {
            AssistanceState::Fulfilled(text) | AssistanceState::Failed(text) => Some(text),
            AssistanceState::Idle | AssistanceState::Pending => None,
        }
    }
}

/// View state for the three assistance slots.
///
/// One gate covers all slots: while any slot is pending, new requests are refused.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AssistancePanel {
    pub review: AssistanceState,
    pub hints: AssistanceState,
    pub similar: AssistanceState,
}

impl AssistancePanel {
    pub fn slot(&self, kind: AssistanceKind) -> &AssistanceState {
        match kind {
            AssistanceKind::Review => &self.review,
            AssistanceKind::Hints => &self.hints,
            AssistanceKind::Similar => &self.similar,
        }
    }

    fn slot_mut(&mut self, kind: AssistanceKind) -> &mut AssistanceState {
        match kind {
            AssistanceKind::Review => &mut self.review,
            AssistanceKind::Hints => &mut self.hints,
            AssistanceKind::Similar => &mut self.similar,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.review.is_pending() || self.hints.is_pending() || self.similar.is_pending()
    }

    /// Move a slot to `Pending`, or refuse if any request is in flight
    pub fn begin(&mut self, kind: AssistanceKind) -> Result<()> {
        if self.is_busy() {
            return Err(AppError::AssistanceBusy);
        }
        *self.slot_mut(kind) = AssistanceState::Pending;
        Ok(())
    }

    pub fn fulfil(&mut self, kind: AssistanceKind, text: String) {
        *self.slot_mut(kind) = AssistanceState::Fulfilled(text);
    }

    pub fn fail(&mut self, kind: AssistanceKind, fallback: String) {
        *self.slot_mut(kind) = AssistanceState::Failed(fallback);
    }
}

/// Prompt sent to the generator
pub fn build_prompt(kind: AssistanceKind, locale: Locale, record: &DailyRecord) -> String {
    let title = locale.problem_title(&record.problem);

    match (kind, locale) {
        (AssistanceKind::Review, Locale::En) => format!(
            "You are a senior algorithms interviewer.\n\
             The problem is: {title}.\n\
             Here is the user's code:\n\
             ```\n{notes}\n```\n\
             Give brief feedback covering:\n\
             1. Whether the code is correct.\n\
             2. Time and space complexity.\n\
             3. Suggestions for improvement (if a better solution exists).\n\n\
             Use concise Markdown.",
            notes = record.notes
        ),
        (AssistanceKind::Review, Locale::Zh) => format!(
            "你是一个资深的算法面试官。\n\
             题目是：{title}。\n\
             这是用户写的代码：\n\
             ```\n{notes}\n```\n\
             请提供以下内容的简短中文反馈：\n\
             1. 代码的正确性分析。\n\
             2. 时间和空间复杂度。\n\
             3. 改进建议（如果有更优解）。\n\n\
             请使用简洁的 Markdown 格式。",
            notes = record.notes
        ),
        (AssistanceKind::Hints, Locale::En) => format!(
            "Give 3 progressive hints for the LeetCode problem \"{title}\".\n\
             The first hint is the most basic; the third comes closest to the core algorithm.\n\
             Use Markdown."
        ),
        (AssistanceKind::Hints, Locale::Zh) => format!(
            "请为 LeetCode 题目 \"{title}\" 提供 3 条循序渐进的解题提示。\n\
             第一条提示最基础，第三条提示最接近核心算法。\n\
             请使用中文，Markdown 格式。"
        ),
        (AssistanceKind::Similar, Locale::En) => format!(
            "For the LeetCode problem \"{title}\" (tags: {tags}), recommend 3-4 LeetCode problems \
             with similar logic or that test similar skills.\n\
             For each, give the title, the difficulty (Easy/Medium/Hard) and a one-sentence reason.\n\
             Use a Markdown list.",
            tags = record.problem.tags.join(", ")
        ),
        (AssistanceKind::Similar, Locale::Zh) => format!(
            "针对 LeetCode 题目 \"{title}\" (标签: {tags})，推荐 3-4 道逻辑相似或考察点相近的 LeetCode 题目。\n\
             请提供题目名称、难度（简单/中等/困难）以及一句话推荐理由。\n\
             请使用中文，Markdown 列表格式。",
            tags = record.problem.tags.join(", ")
        ),
    }
}

/// Text shown when the gateway call fails
pub fn failure_fallback(kind: AssistanceKind, locale: Locale) -> &'static str {
    match (kind, locale) {
        (AssistanceKind::Review, Locale::En) => {
            "AI feedback is unavailable right now. Check your network connection or API key."
        }
        (AssistanceKind::Review, Locale::Zh) => "暂时无法获取 AI 反馈，请检查网络或 API Key。",
        (AssistanceKind::Hints, Locale::En) => "Unable to fetch hints.",
        (AssistanceKind::Hints, Locale::Zh) => "无法获取提示。",
        (AssistanceKind::Similar, Locale::En) => "Unable to fetch similar problems.",
        (AssistanceKind::Similar, Locale::Zh) => "无法获取类似题目。",
    }
}

/// Text shown when the gateway answers with nothing
pub fn empty_fallback(kind: AssistanceKind, locale: Locale) -> &'static str {
    match (kind, locale) {
        (AssistanceKind::Review, Locale::En) => "The AI review failed. Check your network and try again.",
        (AssistanceKind::Review, Locale::Zh) => "AI 评审失败，请检查网络后再试。",
        (AssistanceKind::Hints, Locale::En) => "No hints were returned.",
        (AssistanceKind::Hints, Locale::Zh) => "无法获取解题提示。",
        (AssistanceKind::Similar, Locale::En) => "No related problems found.",
        (AssistanceKind::Similar, Locale::Zh) => "未找到相关题目。",
    }
}

/// Service for assistance requests
#[derive(Clone)]
pub struct AssistanceService {
    generator: Arc<dyn TextGenerator>,
    panel: Arc<Mutex<AssistancePanel>>,
    locale: Locale,
}

impl AssistanceService {
    pub fn new(generator: Arc<dyn TextGenerator>, locale: Locale) -> Self {
        Self {
            generator,
            panel: Arc::new(Mutex::new(AssistancePanel::default())),
            locale,
        }
    }

    /// Run one request.
    ///
    /// Returns the generated text or the fallback text. Fails only with
    /// `AssistanceBusy` when another request is still pending.
    pub async fn request(&self, kind: AssistanceKind, record: &DailyRecord) -> Result<String> {
        self.panel.lock().await.begin(kind)?;

        tracing::info!("Requesting {:?} for {}", kind, record.problem.title);

        let prompt = build_prompt(kind, self.locale, record);
        let outcome = self.generator.generate(&prompt).await;

        let mut panel = self.panel.lock().await;
        match outcome {
            Ok(text) if !text.trim().is_empty() => {
                panel.fulfil(kind, text.clone());
                Ok(text)
            }
            Ok(_) => {
                tracing::warn!("Empty {:?} response from text generator", kind);
                let fallback = empty_fallback(kind, self.locale).to_string();
                panel.fail(kind, fallback.clone());
                Ok(fallback)
            }
            Err(e) => {
                tracing::error!("{:?} request failed: {}", kind, e);
                let fallback = failure_fallback(kind, self.locale).to_string();
                panel.fail(kind, fallback.clone());
                Ok(fallback)
            }
        }
    }

    /// Code review of the record's notes
    pub async fn review(&self, record: &DailyRecord) -> Result<String> {
        self.request(AssistanceKind::Review, record).await
    }

    /// Three progressive hints
    pub async fn hints(&self, record: &DailyRecord) -> Result<String> {
        self.request(AssistanceKind::Hints, record).await
    }

    /// Related problems
    pub async fn similar(&self, record: &DailyRecord) -> Result<String> {
        self.request(AssistanceKind::Similar, record).await
    }

    pub async fn state(&self, kind: AssistanceKind) -> AssistanceState {
        self.panel.lock().await.slot(kind).clone()
    }

    pub async fn panel(&self) -> AssistancePanel {
        self.panel.lock().await.clone()
    }

    pub async fn is_busy(&self) -> bool {
        self.panel.lock().await.is_busy()
    }
}
