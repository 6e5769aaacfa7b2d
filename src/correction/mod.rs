pub mod corrector;

pub mod edit_distance;

pub mod rules;

pub use corrector::FuzzyCorrector;
