//! Barcode capture.
//!
//! Decoding is delegated to an external scanning library behind
//! [`CodeScanner`]. The [`ScanSession`] tracks the scanning panel: whether a
//! scan is running and the last status message shown to the user.

use std::future::Future;

/// Why a scan produced no code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScanError {
    /// The user or the device aborted the scan.
    #[error("scan cancelled")]
    Cancelled,

    /// No usable video input on this device.
    #[error("scanning unsupported: {0}")]
    Unsupported(String),

    /// The library reported an error.
    #[error("scan failed: {0}")]
    Failed(String),
}

/// Capability: decode one code from an input device.
///
/// Implementations are created lazily by the shell, only when the user asks
/// to scan.
pub trait CodeScanner {
    /// Wait for a decoded code.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError`] when the scan is cancelled, unsupported, or fails.
    fn scan(&self) -> impl Future<Output = Result<String, ScanError>> + Send;
}

/// State of the scanning panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanSession {
    scanning: bool,
    status: Option<String>,
}

impl ScanSession {
    /// Whether a scan is in progress.
    #[must_use]
    pub const fn is_scanning(&self) -> bool {
        self.scanning
    }

    /// Last status message, if any.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Begin a scan, clearing the previous status.
    pub fn start(&mut self) {
        self.scanning = true;
        self.status = None;
    }

    /// Cancel the scan and reset the panel.
    pub fn stop(&mut self) {
        *self = Self::default();
    }

    /// End the scan with the scanner's result.
    ///
    /// Returns the decoded code on success. Failures become the status
    /// message. A result arriving after [`stop`](Self::stop) is dropped.
    pub fn finish(&mut self, result: Result<String, ScanError>) -> Option<String> {
        if !self.scanning {
            tracing::debug!("Scan result arrived with no scan in progress, ignoring");
            return None;
        }
        self.scanning = false;

        let result = result.and_then(|code| {
            let code = code.trim();
            if code.is_empty() {
                Err(ScanError::Failed("no code detected".to_owned()))
            } else {
                Ok(code.to_owned())
            }
        });

        match result {
            Ok(code) => {
                tracing::info!(code = %code, "Scanned code");
                self.status = Some(format!("Scanned: {code}"));
                Some(code)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Scan did not complete");
                self.status = Some(status_message(&e));
                None
            }
        }
    }
}

fn status_message(error: &ScanError) -> String {
    match error {
        ScanError::Cancelled => "Scan cancelled.".to_owned(),
        ScanError::Unsupported(reason) => format!("Scanning not supported: {reason}"),
        ScanError::Failed(reason) => format!("Scan failed: {reason}"),
    }
}

/// Await one scan and record its outcome in `session`.
///
/// The session must have been [started](ScanSession::start); otherwise the
/// result is dropped as if the scan had been stopped.
pub async fn capture<S: CodeScanner + Sync>(scanner: &S, session: &mut ScanSession) -> Option<String> {
    let result = scanner.scan().await;
    session.finish(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedScanner(Result<String, ScanError>);

    impl CodeScanner for FixedScanner {
        async fn scan(&self) -> Result<String, ScanError> {
            self.0.clone()
        }
    }

    #[tokio::test]
    async fn test_capture_returns_code() {
        let mut session = ScanSession::default();
        session.start();
        let code = capture(&FixedScanner(Ok(" 4006381333931\n".to_owned())), &mut session).await;
        assert_eq!(code.as_deref(), Some("4006381333931"));
        assert!(!session.is_scanning());
        assert_eq!(session.status(), Some("Scanned: 4006381333931"));
    }

    #[tokio::test]
    async fn test_capture_cancelled_sets_status() {
        let mut session = ScanSession::default();
        session.start();
        let code = capture(&FixedScanner(Err(ScanError::Cancelled)), &mut session).await;
        assert!(code.is_none());
        assert_eq!(session.status(), Some("Scan cancelled."));
    }

    #[tokio::test]
    async fn test_capture_unsupported_sets_status() {
        let mut session = ScanSession::default();
        session.start();
        let scanner = FixedScanner(Err(ScanError::Unsupported("no camera".to_owned())));
        assert!(capture(&scanner, &mut session).await.is_none());
        assert_eq!(session.status(), Some("Scanning not supported: no camera"));
    }

    #[tokio::test]
    async fn test_capture_without_start_is_dropped() {
        let mut session = ScanSession::default();
        assert!(capture(&FixedScanner(Ok("123".to_owned())), &mut session).await.is_none());
        assert!(session.status().is_none());
    }

    #[test]
    fn test_blank_code_is_a_failure() {
        let mut session = ScanSession::default();
        session.start();
        assert!(session.finish(Ok("   ".to_owned())).is_none());
        assert_eq!(session.status(), Some("Scan failed: no code detected"));
    }

    #[test]
    fn test_result_after_stop_is_dropped() {
        let mut session = ScanSession::default();
        session.start();
        session.stop();
        assert!(session.finish(Ok("123".to_owned())).is_none());
        assert_eq!(session, ScanSession::default());
    }

    #[test]
    fn test_start_clears_status() {
        let mut session = ScanSession::default();
        session.start();
        session.finish(Err(ScanError::Failed("glare".to_owned())));
        assert!(session.status().is_some());

        session.start();
        assert!(session.is_scanning());
        assert!(session.status().is_none());
    }
}
