pub mod banner;
pub mod extractor;
pub mod fetch;
pub mod output;
pub mod parser;
pub mod sentiment;
