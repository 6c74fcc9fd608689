pub mod api;
pub mod avatars;
