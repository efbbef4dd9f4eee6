pub mod scoring;
pub mod ranker;
