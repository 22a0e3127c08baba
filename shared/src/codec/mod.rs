mod error;
mod reader;
mod value;
mod writer;

pub use error::CodecError;
pub use reader::ByteReader;
pub use value::{PropertyValue, Shape};
pub use writer::ByteWriter;
