pub mod acnes;
pub mod config;
pub mod data;
pub mod dispatch;
pub mod diversity;
pub mod parse;
pub mod shared;
pub mod species;
pub mod spo2;
pub mod spots;
