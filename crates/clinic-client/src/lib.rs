//! Browser-side form behaviour of the clinic site: pre-submission
//! validation and the submit-and-render flow against the intake service.

pub mod error;
pub mod forms;
pub mod submit;

pub use error::ClientError;
pub use forms::{FieldKind, Form, FormField, FormKind};
pub use submit::{IntakeClient, SubmitOutcome};
