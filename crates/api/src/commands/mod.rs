//! Application commands - the operations the screens and the CLI invoke
//!
//! Every command takes the shared [`AppContext`](crate::AppContext), logs its
//! outcome and returns a domain `Result`.

mod board;
mod dashboard;
mod directory;
mod schedule;
mod session;

pub use board::*;
pub use dashboard::*;
pub use directory::*;
pub use schedule::*;
pub use session::*;

use salonlite_core::LoadState;
use salonlite_domain::SalonError;

/// Error for a view whose latest fetch did not leave usable data.
///
/// Views keep only the failure message, so a failed fetch resurfaces as a
/// network error.
fn unusable_view<T>(state: &LoadState<T>, screen: &str) -> SalonError {
    match state {
        LoadState::Failed(message) => SalonError::Network(message.clone()),
        _ => SalonError::Internal(format!("{screen} load was superseded")),
    }
}
