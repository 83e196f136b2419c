pub mod brand_dna;
pub mod exemplar;

pub use brand_dna::{BrandDna, BrandFormats};
pub use exemplar::Exemplar;
