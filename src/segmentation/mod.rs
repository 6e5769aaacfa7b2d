pub mod lemma;

pub mod noise_filter;

pub mod tokenizer;
