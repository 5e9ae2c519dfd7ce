pub mod db;
pub mod position;
pub mod club;
pub mod player;

pub use position::Position;
