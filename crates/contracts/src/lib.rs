//! Core of the schema form builder: schema parsing, the last-good schema
//! store, required-field validation and the submission session.
//!
//! Nothing here touches the DOM, so all of it is tested on the host.

pub mod domain;
pub mod shared;
