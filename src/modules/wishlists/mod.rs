pub mod controller;
pub mod router;

pub use router::init_wishlists_router;
