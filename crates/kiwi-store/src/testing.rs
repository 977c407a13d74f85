//! Test doubles shared by the unit tests of this crate.

use std::sync::Mutex;

use crate::error::{TransportError, TransportResult};
use crate::memory::InMemoryObjectTransport;
use crate::traits::{ObjectTransport, PutObjectRequest};

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Call {
    Exists(String),
    Put(String),
    Get(String),
}

/// Which calls a [`RecordingTransport`] fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FailOn {
    Nothing,
    Everything,
    Get,
}

/// Records every call, then either forwards it to an in-memory transport or
/// fails it.
pub(crate) struct RecordingTransport {
    inner: InMemoryObjectTransport,
    fail_on: FailOn,
    calls: Mutex<Vec<Call>>,
}

impl RecordingTransport {
    pub(crate) fn new() -> Self {
        Self {
            inner: InMemoryObjectTransport::new(),
            fail_on: FailOn::Nothing,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            fail_on: FailOn::Everything,
            ..Self::new()
        }
    }

    /// Answers existence checks and writes, fails every read.
    pub(crate) fn failing_reads() -> Self {
        Self {
            fail_on: FailOn::Get,
            ..Self::new()
        }
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn inner(&self) -> &InMemoryObjectTransport {
        &self.inner
    }

    fn record(&self, call: Call) -> TransportResult<()> {
        let fails = match self.fail_on {
            FailOn::Nothing => false,
            FailOn::Everything => true,
            FailOn::Get => matches!(call, Call::Get(_)),
        };
        self.calls.lock().unwrap().push(call);
        if fails {
            return Err(TransportError::Unavailable("connection reset".into()));
        }
        Ok(())
    }
}

impl ObjectTransport for RecordingTransport {
    fn exists(&self, bucket: &str, key: &str) -> TransportResult<bool> {
        self.record(Call::Exists(key.to_string()))?;
        self.inner.exists(bucket, key)
    }

    fn put(&self, request: PutObjectRequest) -> TransportResult<()> {
        self.record(Call::Put(request.key.clone()))?;
        self.inner.put(request)
    }

    fn get(&self, bucket: &str, key: &str) -> TransportResult<Vec<u8>> {
        self.record(Call::Get(key.to_string()))?;
        self.inner.get(bucket, key)
    }
}
