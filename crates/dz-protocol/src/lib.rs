//! Wire types shared by the Diagnoze classifier and API.

pub mod chat;
pub mod clinical;
pub mod diagnosis;

pub use chat::*;
pub use clinical::*;
pub use diagnosis::*;
