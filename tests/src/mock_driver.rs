use std::sync::{Arc, Mutex};
use tabula_core::{
    async_trait,
    driver::{Driver, ListRecords, RawRecord},
    Error, Result,
};

/// Requests received by a [`MockDriver`], in order.
pub type RequestLog = Arc<Mutex<Vec<ListRecords>>>;

/// A driver that answers every request with a canned response and records
/// what it was asked.
#[derive(Debug)]
pub struct MockDriver {
    response: Response,

    /// Log of every request received
    /// Using Arc<Mutex> so tests can inspect it after handing the driver off
    log: RequestLog,
}

#[derive(Debug)]
enum Response {
    Records(Vec<RawRecord>),
    Fail(Error),
}

impl MockDriver {
    /// Responds with `records` to every request.
    pub fn new(records: impl IntoIterator<Item = RawRecord>) -> Self {
        Self {
            response: Response::Records(records.into_iter().collect()),
            log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Fails every request with `err`.
    pub fn failing(err: Error) -> Self {
        Self {
            response: Response::Fail(err),
            log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a handle to access the request log
    pub fn log_handle(&self) -> RequestLog {
        self.log.clone()
    }
}

#[async_trait]
impl Driver for MockDriver {
    async fn list_records(&self, op: ListRecords) -> Result<Vec<RawRecord>> {
        self.log
            .lock()
            .expect("Failed to acquire request log lock")
            .push(op);

        match &self.response {
            Response::Records(records) => Ok(records.clone()),
            Response::Fail(err) => Err(err.clone()),
        }
    }
}
