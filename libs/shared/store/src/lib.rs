pub mod clinic;

pub use clinic::ClinicStore;
