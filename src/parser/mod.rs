
pub mod reader;
pub mod writer;

pub use reader::GraphFileReader;
pub use writer::GraphFileWriter;
