pub mod curator;
pub mod providers;

pub use curator::KnowledgeCurator;
