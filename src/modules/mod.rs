pub mod auth;
pub mod bookings;
pub mod documents;
pub mod packages;
pub mod stories;
pub mod users;
pub mod wishlists;
