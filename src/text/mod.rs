// Text preparation — normalization, sentence segmentation, and the two
// tokenization policies.

pub mod normalize;
pub mod sentences;
pub mod tokenize;
