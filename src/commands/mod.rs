pub mod append;
pub mod insert;
pub mod merge;
pub mod slice;
pub mod split;
