//! Club CRUD: wire types (`domain`) and the application service (`service`).

pub mod domain;
pub mod service;

pub use domain::{ClubDto, ClubPatch};
pub use service::ClubService;
