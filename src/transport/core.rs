use std::sync::Arc;

use http::{Request, Response};

/// The capability of executing one HTTP request.
///
/// Implementations may block on network I/O. Errors are transport-level
/// failures where no response was obtained; HTTP error statuses are ordinary
/// `Ok` responses.
pub trait Transport: Send + Sync {
    fn execute(&self, request: Request<Vec<u8>>) -> anyhow::Result<Response<Vec<u8>>>;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn execute(&self, request: Request<Vec<u8>>) -> anyhow::Result<Response<Vec<u8>>> {
        (**self).execute(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn execute(&self, request: Request<Vec<u8>>) -> anyhow::Result<Response<Vec<u8>>> {
        (**self).execute(request)
    }
}
