//! Contact form submission: field collection, urlencoding, and mapping the endpoint's reply to
//! the message shown under the form.

pub(crate) mod contact;
pub(crate) mod data;
#[cfg(feature = "http")]
pub(crate) mod http;

pub use contact::{
    ContactForm, DEFAULT_ENDPOINT, DEFAULT_FAILURE_MESSAGE, DEFAULT_SUCCESS_MESSAGE, FormConfig,
    FormOutcome, FormResponse, FormTransport, SubmitReport, interpret_response,
};
pub use data::FormData;
#[cfg(feature = "http")]
pub use http::IsahcTransport;
