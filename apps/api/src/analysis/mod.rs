// ATS scoring pipeline: normalization, skill extraction, TF-IDF similarity
// and weighted score combination. Pure and synchronous; the HTTP handlers
// are the only async part.

pub mod combiner;
pub mod handlers;
pub mod normalizer;
pub mod similarity;
pub mod skills;
