//! # Route Modules
//!
//! - `schema`: `POST /schema/{schema_id}` upload and `GET /schema/{schema_id}`
//!   download.
//! - `validate`: `POST /validate/{schema_id}` payload validation.

pub mod schema;
pub mod validate;

use std::future::Future;
use std::time::Duration;

use jvs_core::ServiceError;

/// Run a service call under the request deadline.
///
/// The only suspension point of every service operation is its store call,
/// so an expired deadline is reported as that store call failing: `on_elapsed`
/// is `ServiceError::CreateSchema` for uploads and
/// `ServiceError::DownloadSchema` for downloads and validations.
pub(crate) async fn within_deadline<T, F>(
    deadline: Duration,
    on_elapsed: fn(String) -> ServiceError,
    call: F,
) -> Result<T, ServiceError>
where
    F: Future<Output = Result<T, ServiceError>>,
{
    match tokio::time::timeout(deadline, call).await {
        Ok(result) => result,
        Err(_) => {
            tracing::warn!(deadline_ms = deadline.as_millis() as u64, "request deadline exceeded");
            Err(on_elapsed(format!(
                "request deadline of {} ms exceeded",
                deadline.as_millis()
            )))
        }
    }
}
