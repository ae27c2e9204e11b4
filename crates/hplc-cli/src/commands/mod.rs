pub mod export;
pub mod parse;
pub mod patterns;
