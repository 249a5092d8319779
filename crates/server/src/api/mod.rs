pub mod handlers;
pub mod influencers;
pub mod middleware;
pub mod routes;

pub use routes::create_router;
