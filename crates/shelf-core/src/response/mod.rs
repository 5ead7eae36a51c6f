//! Uniform response payload contracts shared by every API view.

pub mod envelope;
pub mod links;

pub use envelope::{
    Audience, ErrorKind, ErrorResponse, NoContentResponse, NotFoundResponse, SuccessResponse,
    UpdateResponse,
};
pub use links::{Links, response_links};
