/// Outbound notification email.
///
/// A bounded, strictly ordered queue drained by a single worker that hands
/// each [`AuthenticationCodeEmail`](remark_types::models::AuthenticationCodeEmail)
/// to a pluggable [`EmailSender`].
pub mod dispatcher;
pub mod sender;
pub mod sendgrid;

use thiserror::Error;

pub use dispatcher::{Dispatcher, DispatcherConfig};
pub use sender::{EmailSender, LogEmailSender, MockEmailSender};
pub use sendgrid::SendgridEmailSender;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider rejected email with status {status}: {body}")]
    Provider { status: u16, body: String },
}
