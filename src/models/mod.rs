pub mod avatar;
pub mod catalog;

pub use avatar::{Avatar, AvatarKind};
pub use catalog::{AvatarCatalog, AvatarCollection, SelectionOutcome};
