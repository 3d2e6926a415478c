pub mod exercise;
pub mod history;
pub mod home;
pub mod not_found;
