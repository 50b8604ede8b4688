//! CSV collaborators: read one name column in, write matches out.

pub mod reader;
pub mod writer;

pub use reader::{read_column, read_column_from, ReadOptions};
pub use writer::{write_matches, write_matches_to_path, Header};
