pub mod cursor;
pub mod probability;
pub mod scores;
pub mod taxonomy;

pub use cursor::Cursor;
pub use probability::Probability;
pub use scores::ClassScores;
pub use taxonomy::TransientClass;
