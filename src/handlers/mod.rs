pub mod accreditations;
pub mod contact;
pub mod health;
pub mod providers;
pub mod sync;
