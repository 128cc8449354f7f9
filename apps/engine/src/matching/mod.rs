// Core matching engine: tokenization, tag overlap scoring, posting
// filtering and ranking, content selection. Pure functions over borrowed
// data; no I/O at this layer, and nothing here may panic on real input.

pub mod filter;
pub mod ranker;
pub mod scoring;
pub mod selector;
pub mod tokenizer;
