//! Transaction operations: the single write path and the ordered reads.

mod list;
mod write;
