pub mod match3;
pub mod session_rng;

pub use session_rng::SessionRng;
