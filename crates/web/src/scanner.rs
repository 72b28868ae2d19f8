//! Barcode results posted by the browser.
//!
//! The scanning library runs client-side against the camera; when it settles
//! the page posts the decoded code or the failure kind back here.

use pantry_core::scanner::{CodeScanner, ScanError};
use serde::Deserialize;

/// Form posted by the scanning panel.
#[derive(Debug, Default, Deserialize)]
pub struct ScanResultForm {
    /// Decoded code, on success.
    pub code: Option<String>,
    /// Failure kind: `cancelled`, `unsupported` or anything else for errors.
    pub error: Option<String>,
    /// Library-provided detail for the failure.
    pub message: Option<String>,
}

/// A scan whose outcome the browser already delivered.
#[derive(Debug, Clone)]
pub struct SubmittedScan {
    outcome: Result<String, ScanError>,
}

impl From<ScanResultForm> for SubmittedScan {
    fn from(form: ScanResultForm) -> Self {
        let detail = form
            .message
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| "unknown error".to_owned());

        let error = form.error.as_deref().map(str::trim).filter(|e| !e.is_empty());
        let outcome = match (error, form.code) {
            (Some("cancelled"), _) => Err(ScanError::Cancelled),
            (Some("unsupported"), _) => Err(ScanError::Unsupported(detail)),
            (Some(_), _) => Err(ScanError::Failed(detail)),
            (None, Some(code)) => Ok(code),
            (None, None) => Err(ScanError::Failed("no result received".to_owned())),
        };

        Self { outcome }
    }
}

impl CodeScanner for SubmittedScan {
    async fn scan(&self) -> Result<String, ScanError> {
        self.outcome.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn outcome(form: ScanResultForm) -> Result<String, ScanError> {
        SubmittedScan::from(form).scan().await
    }

    #[tokio::test]
    async fn test_code_passes_through() {
        let form = ScanResultForm {
            code: Some("012345678905".to_owned()),
            ..ScanResultForm::default()
        };
        assert_eq!(outcome(form).await, Ok("012345678905".to_owned()));
    }

    #[tokio::test]
    async fn test_error_kinds() {
        let cancelled = ScanResultForm {
            error: Some("cancelled".to_owned()),
            ..ScanResultForm::default()
        };
        assert_eq!(outcome(cancelled).await, Err(ScanError::Cancelled));

        let unsupported = ScanResultForm {
            error: Some("unsupported".to_owned()),
            message: Some("no camera".to_owned()),
            ..ScanResultForm::default()
        };
        assert_eq!(
            outcome(unsupported).await,
            Err(ScanError::Unsupported("no camera".to_owned()))
        );

        let failed = ScanResultForm {
            error: Some("NotReadableError".to_owned()),
            code: Some("ignored".to_owned()),
            ..ScanResultForm::default()
        };
        assert_eq!(
            outcome(failed).await,
            Err(ScanError::Failed("unknown error".to_owned()))
        );
    }

    #[tokio::test]
    async fn test_empty_form_is_failure() {
        assert!(matches!(
            outcome(ScanResultForm::default()).await,
            Err(ScanError::Failed(_))
        ));
    }
}
