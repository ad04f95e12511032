//! Wire contracts of the poster catalogue API.
//!
//! Every record the dashboard exchanges with the backend lives here, together
//! with the pagination envelope and the multipart field builders used by the
//! update endpoints.

pub mod domain;
pub mod shared;
pub mod system;
