use std::process::{ExitCode, Termination};

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use error_stack::Report;
use kernel::KernelError;
use serde::Serialize;

#[derive(Debug)]
pub struct StackTrace(Report<KernelError>);

impl From<Report<KernelError>> for StackTrace {
    fn from(e: Report<KernelError>) -> Self {
        StackTrace(e)
    }
}

impl Termination for StackTrace {
    fn report(self) -> ExitCode {
        self.0.report()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    error_code: i32,
    msg: String,
}

#[derive(Debug)]
pub struct ErrorStatus(Report<KernelError>);

impl From<Report<KernelError>> for ErrorStatus {
    fn from(e: Report<KernelError>) -> Self {
        ErrorStatus(e)
    }
}

impl IntoResponse for ErrorStatus {
    fn into_response(self) -> axum::response::Response {
        let kind = *self.0.current_context();
        if let Some(error_code) = kind.code() {
            let message = self
                .0
                .downcast_ref::<String>()
                .cloned()
                .unwrap_or_else(|| kind.to_string());
            let body = ErrorBody {
                error_code,
                msg: format!("Book Store exception thrown: {message}"),
            };
            return (StatusCode::BAD_REQUEST, Json(body)).into_response();
        }
        tracing::error!("{:?}", self.0);
        match kind {
            KernelError::Concurrency => StatusCode::CONFLICT,
            KernelError::Timeout => StatusCode::REQUEST_TIMEOUT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
        .into_response()
    }
}

#[cfg(test)]
mod test {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use error_stack::Report;
    use kernel::KernelError;
    use serde_json::{json, Value};

    use crate::error::ErrorStatus;

    async fn body_of(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn domain_errors_are_bad_requests_with_code_and_message() {
        let report = Report::new(KernelError::NotEnoughLoyaltyPoints)
            .attach_printable("Not enough loyalty points to receive the free books".to_string());
        let response = ErrorStatus::from(report).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_of(response).await,
            json!({
                "errorCode": 103,
                "msg": "Book Store exception thrown: Not enough loyalty points to receive the free books"
            })
        );
    }

    #[tokio::test]
    async fn latest_message_wins() {
        let report = Report::new(KernelError::ClientNotFound)
            .attach_printable("first".to_string())
            .attach_printable("Client with ID 9 not found".to_string());
        let response = ErrorStatus::from(report).into_response();

        assert_eq!(
            body_of(response).await["msg"],
            "Book Store exception thrown: Client with ID 9 not found"
        );
    }

    #[test]
    fn infrastructure_errors_map_to_statuses() {
        let status = |kind: KernelError| {
            ErrorStatus::from(Report::new(kind))
                .into_response()
                .status()
        };
        assert_eq!(status(KernelError::Concurrency), StatusCode::CONFLICT);
        assert_eq!(status(KernelError::Timeout), StatusCode::REQUEST_TIMEOUT);
        assert_eq!(status(KernelError::Internal), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
