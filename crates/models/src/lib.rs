#[macro_use]
extern crate serde;

pub mod api;
pub mod channel;
pub mod error;
pub mod presence;
pub mod sf;
pub mod user;

pub use self::{api::*, channel::*, error::*, presence::*, sf::*, user::*};

#[inline]
pub const fn is_false(value: &bool) -> bool {
    !*value
}
