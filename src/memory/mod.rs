/*!
 * Memory Module
 * Worst-fit partition management
 */

pub mod table;
pub mod traits;
pub mod types;

// Re-export for convenience
pub use table::PartitionTable;
pub use traits::*;
pub use types::*;
