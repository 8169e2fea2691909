pub mod input;
pub mod sign_in;
