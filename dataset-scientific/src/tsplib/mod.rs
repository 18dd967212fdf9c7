//! Contains logic to read a subset of TSPLIB95 format.

mod header;
pub use self::header::TsplibHeader;

mod reader;
pub use self::reader::*;
