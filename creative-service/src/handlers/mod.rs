pub mod briefs;
pub mod dna;
pub mod exemplars;
pub mod health;
