//! Session lifecycle: `NotStarted -> InProgress -> Submitted`.
//!
//! [`transition`] is a pure function from the current state and one event to
//! the next state. [`SessionController`] owns the bank, the config and the
//! current state, applies events through `transition`, and logs phase changes.
//!
//! Once submitted, a session is read-only: answer and flag events are
//! rejected with [`AssessError::SessionFrozen`], ticks are ignored and a
//! repeated submit leaves the state unchanged.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::bank::{QuestionBank, validate_bank};
use crate::config::SessionConfig;
use crate::error::{AssessError, AssessResult};
use crate::grading::{AnswerSheet, GradeReport, evaluate};
use crate::item::{Answer, AssessmentItem};

/// Remaining time below which the clock is shown as running low.
pub const LOW_TIME_WARNING_S: u32 = 5 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    NotStarted,
    InProgress,
    Submitted,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::NotStarted => "not started",
            Phase::InProgress => "in progress",
            Phase::Submitted => "submitted",
        };
        f.write_str(s)
    }
}

/// Practice shows feedback as soon as an item is answered; exam holds it
/// until submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    Practice,
    Exam,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitReason {
    Manual,
    TimeExpired,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub phase: Phase,
    pub mode: Mode,
    pub answers: AnswerSheet,
    pub flagged: BTreeSet<u32>,
    pub elapsed_s: u32,
    pub remaining_s: u32,
    pub submit_reason: Option<SubmitReason>,
}

impl SessionState {
    pub fn new(mode: Mode) -> Self {
        Self {
            phase: Phase::NotStarted,
            mode,
            answers: AnswerSheet::new(),
            flagged: BTreeSet::new(),
            elapsed_s: 0,
            remaining_s: 0,
            submit_reason: None,
        }
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == Phase::Submitted
    }

    /// Whether the correctness of `item_id` may be shown.
    pub fn feedback_visible(&self, item_id: u32) -> bool {
        match self.phase {
            Phase::Submitted => true,
            _ => self.mode == Mode::Practice && self.answers.contains_key(&item_id),
        }
    }

    /// Fraction of `total_items` answered, in `[0, 1]`.
    pub fn progress(&self, total_items: usize) -> f64 {
        if total_items == 0 {
            return 0.0;
        }
        (self.answers.len() as f64 / total_items as f64).min(1.0)
    }

    pub fn is_low_on_time(&self) -> bool {
        self.phase == Phase::InProgress && self.remaining_s < LOW_TIME_WARNING_S
    }

    /// Remaining time as `MM:SS`.
    pub fn clock(&self) -> String {
        format_clock(self.remaining_s)
    }
}

pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    Start { mode: Mode },
    Answer { item_id: u32, answer: Answer },
    ClearAnswer { item_id: u32 },
    ToggleFlag { item_id: u32 },
    /// One second elapsed.
    Tick,
    Submit,
}

impl SessionEvent {
    fn action(&self) -> &'static str {
        match self {
            SessionEvent::Start { .. } => "start",
            SessionEvent::Answer { .. } => "answer",
            SessionEvent::ClearAnswer { .. } => "clear an answer",
            SessionEvent::ToggleFlag { .. } => "flag an item",
            SessionEvent::Tick => "tick",
            SessionEvent::Submit => "submit",
        }
    }
}

/// What a transition may consult besides the state itself.
#[derive(Debug, Clone, Copy)]
pub struct TransitionContext<'a> {
    pub items: &'a [AssessmentItem],
    pub time_budget_s: u32,
}

impl TransitionContext<'_> {
    fn require_item(&self, item_id: u32) -> AssessResult<()> {
        if self.items.iter().any(|i| i.id == item_id) {
            Ok(())
        } else {
            Err(AssessError::UnknownItem(item_id))
        }
    }
}

fn submitted(mut state: SessionState, reason: SubmitReason) -> SessionState {
    state.phase = Phase::Submitted;
    state.submit_reason = Some(reason);
    state
}

/// Next state after `event`. The input state is never modified.
pub fn transition(
    state: &SessionState,
    event: SessionEvent,
    ctx: &TransitionContext<'_>,
) -> AssessResult<SessionState> {
    let action = event.action();
    match (state.phase, event) {
        (Phase::NotStarted, SessionEvent::Start { mode }) => {
            let next = SessionState {
                phase: Phase::InProgress,
                remaining_s: ctx.time_budget_s,
                ..SessionState::new(mode)
            };
            if next.remaining_s == 0 {
                return Ok(submitted(next, SubmitReason::TimeExpired));
            }
            Ok(next)
        }

        (Phase::InProgress, SessionEvent::Answer { item_id, answer }) => {
            ctx.require_item(item_id)?;
            let mut next = state.clone();
            next.answers.insert(item_id, answer);
            Ok(next)
        }

        (Phase::InProgress, SessionEvent::ClearAnswer { item_id }) => {
            ctx.require_item(item_id)?;
            let mut next = state.clone();
            next.answers.remove(&item_id);
            Ok(next)
        }

        (Phase::InProgress, SessionEvent::ToggleFlag { item_id }) => {
            ctx.require_item(item_id)?;
            let mut next = state.clone();
            if !next.flagged.remove(&item_id) {
                next.flagged.insert(item_id);
            }
            Ok(next)
        }

        (Phase::InProgress, SessionEvent::Tick) => {
            let mut next = state.clone();
            next.remaining_s = next.remaining_s.saturating_sub(1);
            next.elapsed_s += 1;
            if next.remaining_s == 0 {
                return Ok(submitted(next, SubmitReason::TimeExpired));
            }
            Ok(next)
        }

        (Phase::InProgress, SessionEvent::Submit) => {
            Ok(submitted(state.clone(), SubmitReason::Manual))
        }

        // Late ticks and duplicate submits after submission are harmless.
        (Phase::NotStarted, SessionEvent::Tick)
        | (Phase::Submitted, SessionEvent::Tick)
        | (Phase::Submitted, SessionEvent::Submit) => Ok(state.clone()),

        (
            Phase::Submitted,
            SessionEvent::Answer { .. }
            | SessionEvent::ClearAnswer { .. }
            | SessionEvent::ToggleFlag { .. },
        ) => Err(AssessError::SessionFrozen),

        (phase, _) => Err(AssessError::InvalidTransition { action, phase }),
    }
}

/// Single-writer owner of one assessment run.
#[derive(Debug, Clone)]
pub struct SessionController {
    bank: QuestionBank,
    config: SessionConfig,
    state: SessionState,
}

impl SessionController {
    pub fn new(bank: QuestionBank, config: SessionConfig) -> AssessResult<Self> {
        validate_bank(&bank)?;
        config.validate()?;
        let state = SessionState::new(config.default_mode);
        Ok(Self {
            bank,
            config,
            state,
        })
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Apply one event. On error the current state is kept.
    pub fn apply(&mut self, event: SessionEvent) -> AssessResult<Phase> {
        let ctx = TransitionContext {
            items: &self.bank.items,
            time_budget_s: self.config.time_budget_s,
        };
        let before = self.state.phase;
        let next = match transition(&self.state, event, &ctx) {
            Ok(next) => next,
            Err(AssessError::SessionFrozen) => {
                tracing::warn!("ignored change to a submitted session");
                return Err(AssessError::SessionFrozen);
            }
            Err(e) => return Err(e),
        };

        if next.phase != before {
            match next.phase {
                Phase::InProgress => tracing::info!(
                    mode = ?next.mode,
                    time_budget_s = next.remaining_s,
                    items = self.bank.items.len(),
                    "assessment started"
                ),
                Phase::Submitted => tracing::info!(
                    reason = ?next.submit_reason,
                    elapsed_s = next.elapsed_s,
                    answered = next.answers.len(),
                    "assessment submitted"
                ),
                Phase::NotStarted => {}
            }
        }

        self.state = next;
        Ok(self.state.phase)
    }

    pub fn start(&mut self, mode: Mode) -> AssessResult<Phase> {
        self.apply(SessionEvent::Start { mode })
    }

    pub fn answer(&mut self, item_id: u32, answer: Answer) -> AssessResult<Phase> {
        self.apply(SessionEvent::Answer { item_id, answer })
    }

    pub fn clear_answer(&mut self, item_id: u32) -> AssessResult<Phase> {
        self.apply(SessionEvent::ClearAnswer { item_id })
    }

    pub fn toggle_flag(&mut self, item_id: u32) -> AssessResult<Phase> {
        self.apply(SessionEvent::ToggleFlag { item_id })
    }

    pub fn tick(&mut self) -> AssessResult<Phase> {
        self.apply(SessionEvent::Tick)
    }

    /// Deliver up to `seconds` ticks, stopping early once submitted.
    pub fn advance(&mut self, seconds: u32) -> AssessResult<Phase> {
        for _ in 0..seconds {
            if self.tick()? == Phase::Submitted {
                break;
            }
        }
        Ok(self.state.phase)
    }

    pub fn submit(&mut self) -> AssessResult<Phase> {
        self.apply(SessionEvent::Submit)
    }

    /// Discard the run and go back to `NotStarted` for a retake.
    pub fn reset(&mut self) {
        self.state = SessionState::new(self.config.default_mode);
    }

    pub fn feedback_visible(&self, item_id: u32) -> bool {
        self.state.feedback_visible(item_id)
    }

    pub fn progress(&self) -> f64 {
        self.state.progress(self.bank.items.len())
    }

    /// Grade report, available once the session is submitted.
    pub fn report(&self) -> Option<GradeReport> {
        self.state
            .is_submitted()
            .then(|| evaluate(&self.bank.items, &self.state.answers))
    }
}
