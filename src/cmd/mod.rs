pub mod embed;
pub mod identify;
pub mod providers;
