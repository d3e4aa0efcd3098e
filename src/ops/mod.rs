pub mod filter;
pub mod pipeline;
pub mod progress;
pub mod search;
pub mod sort;
pub mod tokenize;
