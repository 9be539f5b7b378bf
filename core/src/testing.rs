//! Test doubles shared by the unit tests in this crate.

use std::io::{self, Cursor, Read};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::error::ApiError;
use crate::log::Logger;
use crate::transport::{RawResponse, Transport};

#[derive(Debug, Default)]
struct BodyState {
    exhausted: AtomicBool,
    dropped: AtomicBool,
}

/// Snapshot of what happened to the last body handed out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BodyProbe {
    exhausted: bool,
    dropped: bool,
}

impl BodyProbe {
    pub fn exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn dropped(&self) -> bool {
        self.dropped
    }
}

struct TrackedBody {
    data: Cursor<Vec<u8>>,
    fail: bool,
    state: Arc<BodyState>,
}

impl Read for TrackedBody {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.fail {
            return Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset"));
        }
        let n = self.data.read(buf)?;
        if n == 0 {
            self.state.exhausted.store(true, Ordering::SeqCst);
        }
        Ok(n)
    }
}

impl Drop for TrackedBody {
    fn drop(&mut self) {
        self.state.dropped.store(true, Ordering::SeqCst);
    }
}

enum Reply {
    Body { status: u16, bytes: Vec<u8> },
    FailingRead { status: u16 },
    Unreachable,
}

/// Canned `Transport` that records requested URLs and instruments the body.
pub struct StubTransport {
    reply: Reply,
    state: Arc<BodyState>,
    urls: Mutex<Vec<String>>,
}

impl StubTransport {
    fn with_reply(reply: Reply) -> Self {
        Self {
            reply,
            state: Arc::new(BodyState::default()),
            urls: Mutex::new(Vec::new()),
        }
    }

    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self::with_reply(Reply::Body {
            status,
            bytes: body.into(),
        })
    }

    pub fn failing_read(status: u16) -> Self {
        Self::with_reply(Reply::FailingRead { status })
    }

    pub fn unreachable() -> Self {
        Self::with_reply(Reply::Unreachable)
    }

    pub fn probe(&self) -> BodyProbe {
        BodyProbe {
            exhausted: self.state.exhausted.load(Ordering::SeqCst),
            dropped: self.state.dropped.load(Ordering::SeqCst),
        }
    }

    pub fn requested_urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

impl Transport for StubTransport {
    fn get(&self, url: &str) -> Result<RawResponse, ApiError> {
        self.urls.lock().unwrap().push(url.to_string());
        let (status, bytes, fail) = match &self.reply {
            Reply::Body { status, bytes } => (*status, bytes.clone(), false),
            Reply::FailingRead { status } => (*status, Vec::new(), true),
            Reply::Unreachable => {
                return Err(ApiError::Transport("connection refused".to_string()));
            }
        };
        Ok(RawResponse {
            status,
            body: Box::new(TrackedBody {
                data: Cursor::new(bytes),
                fail,
                state: Arc::clone(&self.state),
            }),
        })
    }
}

/// Keeps every report as `"{context}: {err}"`, and debug messages verbatim.
#[derive(Debug, Default)]
pub struct RecordingLogger {
    reports: Mutex<Vec<String>>,
    debug: Mutex<Vec<String>>,
}

impl RecordingLogger {
    pub fn reports(&self) -> Vec<String> {
        self.reports.lock().unwrap().clone()
    }

    pub fn debug_messages(&self) -> Vec<String> {
        self.debug.lock().unwrap().clone()
    }
}

impl Logger for RecordingLogger {
    fn report(&self, context: &str, err: &ApiError) {
        self.reports.lock().unwrap().push(format!("{context}: {err}"));
    }

    fn debug(&self, message: &str) {
        self.debug.lock().unwrap().push(message.to_string());
    }
}
