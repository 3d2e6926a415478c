pub mod element;
pub mod navbar;
