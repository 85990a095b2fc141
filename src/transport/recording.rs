use std::sync::{Mutex, PoisonError};

use anyhow::{anyhow, Result};
use serde_json::Value;

use crate::transport::{Endpoint, Transport};

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub endpoint: Endpoint,
    pub body: Value,
}

/// In-memory transport that records every request (no service involved).
#[derive(Default)]
pub struct RecordingTransport {
    requests: Mutex<Vec<RecordedRequest>>,
    /// Number of upcoming posts that fail instead of being recorded.
    failures: Mutex<usize>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the next `n` posts fail.
    pub fn fail_next(&self, n: usize) {
        *self.failures.lock().unwrap_or_else(PoisonError::into_inner) = n;
    }

    /// All recorded requests, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn last(&self) -> Option<RecordedRequest> {
        self.requests.lock().unwrap_or_else(PoisonError::into_inner).last().cloned()
    }

    pub fn len(&self) -> usize {
        self.requests.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.requests.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

impl Transport for RecordingTransport {
    fn post(&self, endpoint: Endpoint, body: &Value) -> Result<()> {
        {
            let mut failures = self.failures.lock().map_err(|_| anyhow!("transport lock poisoned"))?;
            if *failures > 0 {
                *failures -= 1;
                return Err(anyhow!("Invalid status code: 500"));
            }
        }

        self.requests
            .lock()
            .map_err(|_| anyhow!("transport lock poisoned"))?
            .push(RecordedRequest { endpoint, body: body.clone() });
        Ok(())
    }
}
