mod assessment;
mod common;
mod payload;
mod scoring;
mod summary;
