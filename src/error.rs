//! Error taxonomy shared by the router, the provider adapters and the service.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AirQualityError>;

#[derive(Error, Debug)]
pub enum AirQualityError {
    /// No adapter is registered for the requested region.
    #[error("{region} air-quality data is not yet available")]
    UnsupportedRegion { region: String },

    /// Transport failure or an empty response body.
    #[error("[{provider}] provider unavailable: {reason}")]
    ProviderUnavailable { provider: String, reason: String },

    /// The provider answered but its own envelope reports a failure.
    #[error("[{provider}] provider rejected the request: code={code} message={message}")]
    ProviderBadResponse {
        provider: String,
        code: String,
        message: String,
    },
}

impl AirQualityError {
    pub fn unsupported<S: Into<String>>(region: S) -> Self {
        Self::UnsupportedRegion {
            region: region.into(),
        }
    }

    pub fn unavailable<P: Into<String>, R: Into<String>>(provider: P, reason: R) -> Self {
        Self::ProviderUnavailable {
            provider: provider.into(),
            reason: reason.into(),
        }
    }

    pub fn bad_response<P, C, M>(provider: P, code: C, message: M) -> Self
    where
        P: Into<String>,
        C: Into<String>,
        M: Into<String>,
    {
        Self::ProviderBadResponse {
            provider: provider.into(),
            code: code.into(),
            message: message.into(),
        }
    }

    /// Only transport-level failures are worth retrying without investigation.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::ProviderUnavailable { .. })
    }
}
