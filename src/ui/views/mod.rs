pub mod home;
pub mod quiz;
pub mod tips;
