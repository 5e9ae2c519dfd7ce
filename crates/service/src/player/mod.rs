//! Player CRUD. Players carry an optional nested club that is saved with them.

pub mod domain;
pub mod service;

pub use domain::{PlayerDto, PlayerPatch};
pub use service::PlayerService;
