//! Keyboard-wedge barcode scanning.
//!
//! USB and Bluetooth barcode readers present themselves as keyboards and
//! type the decoded code followed by Enter, so a scan is one line of input.

use pantry_core::scanner::{CodeScanner, ScanError};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Stdin};
use tokio::sync::Mutex;

/// Reads one code per line from an async reader.
pub struct LineScanner<R> {
    reader: Mutex<R>,
}

/// Scanner reading from standard input.
pub type StdinScanner = LineScanner<BufReader<Stdin>>;

impl StdinScanner {
    /// Attach to standard input.
    #[must_use]
    pub fn stdin() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()))
    }
}

impl<R> LineScanner<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: Mutex::new(reader),
        }
    }
}

impl<R: AsyncBufRead + Unpin + Send> CodeScanner for LineScanner<R> {
    /// End of input or an empty line cancels the scan.
    async fn scan(&self) -> Result<String, ScanError> {
        let mut line = String::new();
        let read = self
            .reader
            .lock()
            .await
            .read_line(&mut line)
            .await
            .map_err(|e| ScanError::Failed(e.to_string()))?;

        let code = line.trim();
        if read == 0 || code.is_empty() {
            return Err(ScanError::Cancelled);
        }
        Ok(code.to_owned())
    }
}
