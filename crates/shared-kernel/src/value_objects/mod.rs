pub mod doc_path;
pub mod file_stamps;

pub use doc_path::DocPath;
pub use file_stamps::FileStamps;
