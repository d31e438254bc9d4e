//! Command execution helpers
//!
//! Provides utilities to reduce boilerplate when implementing commands with
//! timing and outcome logging.

use std::future::Future;
use std::time::Instant;

use salonlite_common::validation::ValidationError;
use salonlite_domain::{Result as DomainResult, SalonError};
use tracing::debug;

use crate::utils::logging::{error_label, log_command_execution};

/// Execute a command with automatic timing and logging
///
/// # Example
///
/// ```rust,ignore
/// pub async fn my_command(ctx: &AppContext) -> Result<MyResponse> {
///     execute_logged("my_module::my_command", || async {
///         ctx.some_service.do_something().await
///     })
///     .await
/// }
/// ```
pub async fn execute_logged<F, Fut, T>(command_name: &str, command_fn: F) -> DomainResult<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = DomainResult<T>>,
{
    let start = Instant::now();

    let result = command_fn().await;

    if let Err(err) = &result {
        debug!(command = command_name, error_type = error_label(err), error = %err, "command failed");
    }
    log_command_execution(command_name, start.elapsed(), result.is_ok());

    result
}

/// Surface form validation failures as a domain error.
pub fn validation_failed(err: ValidationError) -> SalonError {
    SalonError::Validation(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_result_through() {
        let ok = tokio_test::block_on(execute_logged("test::ok", || async { Ok(3) }));
        assert_eq!(ok, Ok(3));

        let err: DomainResult<()> = tokio_test::block_on(execute_logged("test::err", || async {
            Err(SalonError::NotFound("tech 9".into()))
        }));
        assert_eq!(err, Err(SalonError::NotFound("tech 9".into())));
    }

    #[test]
    fn validation_message_is_kept() {
        let err = validation_failed(ValidationError::field("customer", "Please select a customer"));
        assert_eq!(err, SalonError::Validation("Please select a customer".into()));
    }
}
