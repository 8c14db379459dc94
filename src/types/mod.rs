pub mod contact;
pub mod envelope;
