//! Render-fault classification and the fault-barrier state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! Faults are classified where they originate, as [`UiFault`] variants, so the
//! barrier switches on a discriminant instead of parsing messages. The only
//! message inspection left is [`UiFault::from_js_message`], used when a
//! browser API hands back nothing but an exception string.

#[cfg(test)]
#[path = "fault_test.rs"]
mod fault_test;

/// Browser exception fragments that indicate a malformed URL.
const MALFORMED_URL_MARKERS: [&str; 2] = ["Failed to construct 'URL'", "Invalid URL"];

/// A fault raised while rendering part of the UI.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UiFault {
    /// URL construction failed. Expected and harmless for the UI.
    #[error("malformed URL: {0}")]
    MalformedUrl(String),
    /// Any other rendering fault.
    #[error("{0}")]
    Render(String),
}

impl UiFault {
    /// Classify an exception message coming from a browser API.
    pub fn from_js_message(message: impl Into<String>) -> Self {
        let message = message.into();
        if MALFORMED_URL_MARKERS.iter().any(|m| message.contains(m)) {
            Self::MalformedUrl(message)
        } else {
            Self::Render(message)
        }
    }

    /// Whether the barrier should swallow this fault.
    pub fn is_benign(&self) -> bool {
        matches!(self, Self::MalformedUrl(_))
    }
}

/// What the barrier did with a caught fault.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CatchOutcome {
    Suppressed,
    Faulted,
}

/// Two-state barrier lifecycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum BarrierState {
    /// Children render normally.
    #[default]
    Clear,
    /// A fault was caught; the fallback view renders instead of children.
    Faulted(UiFault),
}

impl BarrierState {
    /// Record `fault`, suppressing benign ones.
    pub fn catch(&mut self, fault: UiFault) -> CatchOutcome {
        if fault.is_benign() {
            leptos::logging::warn!("suppressed benign render fault: {fault}");
            *self = Self::Clear;
            CatchOutcome::Suppressed
        } else {
            leptos::logging::error!("render fault: {fault}");
            *self = Self::Faulted(fault);
            CatchOutcome::Faulted
        }
    }

    /// Return to [`BarrierState::Clear`].
    pub fn reset(&mut self) {
        *self = Self::Clear;
    }

    pub fn is_faulted(&self) -> bool {
        matches!(self, Self::Faulted(_))
    }

    /// The recorded fault, if any.
    pub fn fault(&self) -> Option<&UiFault> {
        match self {
            Self::Clear => None,
            Self::Faulted(fault) => Some(fault),
        }
    }
}
