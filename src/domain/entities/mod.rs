//! Domain entities

mod party;

pub use party::{Mounts, Party, PartyMember, TreasureBundle};
