//! Timed steps of a quote submission.
//!
//! After the email is handed to the mail client the flow waits
//! `submit_delay_ms`, shows the confirmation, waits `reset_delay_ms` and
//! clears the fields. [`SubmissionTimeline`] owns that sequence; the
//! [`Scheduler`] behind it only knows how to run a step later and how to
//! drop everything still pending.

use crate::config::SiteConfig;
use crate::error::Result;
use crate::mail::MailDraft;
use crate::quote::QuoteFlow;

/// A delayed transition of [`QuoteFlow`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimedStep {
    /// Leave `Submitting` and show the confirmation
    Complete,
    /// Clear the form fields
    Reset,
}

impl TimedStep {
    /// Step that follows this one, if any.
    pub fn next(self) -> Option<TimedStep> {
        match self {
            TimedStep::Complete => Some(TimedStep::Reset),
            TimedStep::Reset => None,
        }
    }

    fn apply(self, flow: &mut QuoteFlow) {
        match self {
            TimedStep::Complete => flow.complete_submit(),
            TimedStep::Reset => flow.auto_reset(),
        }
    }
}

/// Runs [`TimedStep`]s after a delay.
///
/// The browser implementation wraps `setTimeout`; when a step fires it must
/// call [`SubmissionTimeline::fire`] with it.
pub trait Scheduler {
    /// Run `step` once `delay_ms` has elapsed.
    fn schedule(&mut self, delay_ms: u64, step: TimedStep) -> Result<()>;

    /// Drop every step that has not fired yet.
    fn cancel_all(&mut self);
}

/// Delays between the mail handoff, the confirmation and the reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmissionTimeline {
    /// Handoff to confirmation
    pub submit_delay_ms: u64,
    /// Confirmation to field reset
    pub reset_delay_ms: u64,
}

impl Default for SubmissionTimeline {
    fn default() -> Self {
        Self::from(&SiteConfig::default())
    }
}

impl From<&SiteConfig> for SubmissionTimeline {
    fn from(config: &SiteConfig) -> Self {
        Self {
            submit_delay_ms: config.submit_delay_ms,
            reset_delay_ms: config.reset_delay_ms,
        }
    }
}

impl SubmissionTimeline {
    /// Delay before `step` runs, counted from the previous step.
    pub fn delay_for(&self, step: TimedStep) -> u64 {
        match step {
            TimedStep::Complete => self.submit_delay_ms,
            TimedStep::Reset => self.reset_delay_ms,
        }
    }

    /// Validate, hand the email off and schedule the confirmation.
    ///
    /// Steps left over from an earlier submission are cancelled first. A
    /// rejected submit (missing fields, already submitting) leaves `flow`
    /// untouched. A failed handoff or schedule puts the flow back into
    /// `Editing` with the values kept, and returns the error.
    pub fn submit<S, H>(
        &self,
        flow: &mut QuoteFlow,
        recipient: &str,
        scheduler: &mut S,
        handoff: H,
    ) -> Result<()>
    where
        S: Scheduler,
        H: FnOnce(&MailDraft) -> Result<()>,
    {
        let draft = flow.begin_submit(recipient)?;
        scheduler.cancel_all();

        let started = handoff(&draft).and_then(|()| {
            scheduler.schedule(self.delay_for(TimedStep::Complete), TimedStep::Complete)
        });
        if let Err(e) = started {
            flow.fail_submit();
            return Err(e);
        }
        Ok(())
    }

    /// Apply a step that just fired and schedule its follow-up.
    pub fn fire<S: Scheduler>(
        &self,
        step: TimedStep,
        flow: &mut QuoteFlow,
        scheduler: &mut S,
    ) -> Result<()> {
        step.apply(flow);
        match step.next() {
            Some(next) => scheduler.schedule(self.delay_for(next), next),
            None => Ok(()),
        }
    }
}
