pub mod use_random;

pub use use_random::use_random_id_for;
