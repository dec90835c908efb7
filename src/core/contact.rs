use crate::constants::{BANNER_HIDE_MS, ERROR_MESSAGE, SUCCESS_MESSAGE};
use serde::Deserialize;

/// JSON body returned by the form relay.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RelayResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Ways a submission can fail; all of them surface as the same banner.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("network error: {0}")]
    Network(String),
    #[error("invalid relay response: {0}")]
    Parse(String),
    #[error("relay rejected submission: {0}")]
    Rejected(String),
}

/// Decode the relay body and map `success: false` to an error.
pub fn interpret_response(body: &str) -> Result<RelayResponse, SubmitError> {
    let resp: RelayResponse =
        serde_json::from_str(body).map_err(|e| SubmitError::Parse(e.to_string()))?;
    if resp.success {
        Ok(resp)
    } else {
        Err(SubmitError::Rejected(
            resp.message.unwrap_or_else(|| "no message".to_string()),
        ))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

impl BannerKind {
    pub fn for_outcome<T>(outcome: &Result<T, SubmitError>) -> Self {
        match outcome {
            Ok(_) => BannerKind::Success,
            Err(_) => BannerKind::Error,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            BannerKind::Success => SUCCESS_MESSAGE,
            BannerKind::Error => ERROR_MESSAGE,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            BannerKind::Success => "success",
            BannerKind::Error => "error",
        }
    }

    /// Whether the form fields should be cleared after showing this banner.
    pub fn resets_form(self) -> bool {
        self == BannerKind::Success
    }
}

/// Hide timer to arm after showing a banner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HideTimer {
    pub generation: u64,
    pub delay_ms: i32,
}

/// Transient status banner. Each `show` starts a new generation; a hide
/// timer only hides the banner if no newer banner was shown since.
#[derive(Clone, Debug, Default)]
pub struct StatusBanner {
    shown: Option<BannerKind>,
    generation: u64,
}

impl StatusBanner {
    pub fn show(&mut self, kind: BannerKind) -> HideTimer {
        self.generation += 1;
        self.shown = Some(kind);
        HideTimer {
            generation: self.generation,
            delay_ms: BANNER_HIDE_MS,
        }
    }

    /// Called when a hide timer fires. Returns the banner to hide, or `None`
    /// when a newer banner has replaced the one the timer was armed for.
    pub fn expire(&mut self, timer: HideTimer) -> Option<BannerKind> {
        if timer.generation == self.generation {
            self.shown.take()
        } else {
            None
        }
    }
}
