//! Adapter between fallible async handlers and axum's handler shape.
//!
//! A handler written as `async fn(extractors) -> Result<R, AppError>` is
//! wrapped by [`async_handler`] into something axum can register directly.
//! Errors and panics never escape the wrapper: both are handed to
//! [`handle_error`](crate::common::error::handle_error).

use std::any::Any;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};

use axum::response::{IntoResponse, Response};
use futures_util::future::{BoxFuture, FutureExt};

use crate::common::error::{handle_error, AppError};

/// Wraps `handler` so that `Err` results and panics are forwarded to the
/// centralized error stage.
///
/// `T` is the handler's single argument: one extractor, or a tuple of
/// extractors when the route needs several.
pub fn async_handler<H, T, Fut, R>(
    handler: H,
) -> impl Fn(T) -> BoxFuture<'static, Response> + Clone + Send + Sync + 'static
where
    H: Fn(T) -> Fut + Clone + Send + Sync + 'static,
    T: Send + 'static,
    Fut: Future<Output = Result<R, AppError>> + Send + 'static,
    R: IntoResponse + Send,
{
    move |args: T| {
        // A handler may panic before it ever yields a future.
        let started = panic::catch_unwind(AssertUnwindSafe(|| handler(args)));

        async move {
            let outcome = match started {
                Ok(fut) => AssertUnwindSafe(fut).catch_unwind().await,
                Err(payload) => Err(payload),
            };

            match outcome {
                Ok(Ok(response)) => response.into_response(),
                Ok(Err(err)) => handle_error(err),
                Err(payload) => handle_error(AppError::Internal(panic_message(payload.as_ref()))),
            }
        }
        .boxed()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "handler panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::error::INTERNAL_ERROR_MESSAGE;
    use axum::body::to_bytes;
    use axum::http::StatusCode;
    use serde_json::Value;
    use std::future::{ready, Ready};

    async fn message_of(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        body["message"].as_str().unwrap_or_default().to_string()
    }

    async fn succeeds(name: String) -> Result<String, AppError> {
        tokio::task::yield_now().await;
        Ok(name)
    }

    async fn rejects(_: ()) -> Result<&'static str, AppError> {
        tokio::task::yield_now().await;
        Err(AppError::NotFound("missing".into()))
    }

    async fn panics_while_polled(_: ()) -> Result<&'static str, AppError> {
        tokio::task::yield_now().await;
        panic!("lost connection");
    }

    fn panics_before_future(_: ()) -> Ready<Result<&'static str, AppError>> {
        panic!("bad input");
    }

    #[tokio::test]
    async fn ok_result_is_sent_unchanged() {
        let handler = async_handler(succeeds);
        let response = handler("drama".to_string()).await;

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"drama");
    }

    #[tokio::test]
    async fn err_result_goes_to_error_stage() {
        let response = async_handler(rejects)(()).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(message_of(response).await, "missing");
    }

    #[tokio::test]
    async fn panic_inside_future_becomes_500() {
        let response = async_handler(panics_while_polled)(()).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message_of(response).await, INTERNAL_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn synchronous_panic_becomes_500() {
        let response = async_handler(panics_before_future)(()).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message_of(response).await, INTERNAL_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn wrapped_handler_is_reusable() {
        let handler = async_handler(|n: u8| ready(Ok::<_, AppError>(n.to_string())));
        let again = handler.clone();

        assert_eq!(handler(1).await.status(), StatusCode::OK);
        assert_eq!(again(2).await.status(), StatusCode::OK);
    }

    #[test]
    fn panic_payloads_are_readable() {
        assert_eq!(panic_message(&"static"), "static");
        assert_eq!(panic_message(&String::from("owned")), "owned");
        assert_eq!(panic_message(&42_u32), "handler panicked");
    }
}
