//! Service layer providing the club and player CRUD operations.
//! - `store` owns persistence behind the `EntityStore` trait.
//! - `club` and `player` hold the wire DTOs and the services that convert
//!   between DTOs and store records.

pub mod errors;
pub mod patch;
pub mod store;
pub mod club;
pub mod player;
#[cfg(test)]
pub mod test_support;

pub use club::{ClubDto, ClubPatch, ClubService};
pub use errors::ServiceError;
pub use patch::Patch;
pub use player::{PlayerDto, PlayerPatch, PlayerService};
