//! Card system: definitions, board cards, and validated sets.
//!
//! ## Key Types
//!
//! - `CardId`: Catalog identifier
//! - `CardDefinition`: One distinct catalog entry
//! - `CardSet`: Definitions checked for distinct display names
//! - `BoardCard`: A definition placed in a board slot

pub mod definition;
pub mod instance;
pub mod registry;

pub use definition::{CardDefinition, CardId};
pub use instance::BoardCard;
pub use registry::CardSet;
