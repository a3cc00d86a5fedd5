pub mod repository;
pub mod table;
pub mod graph;

pub use repository::*;
pub use table::*;
pub use graph::*;
