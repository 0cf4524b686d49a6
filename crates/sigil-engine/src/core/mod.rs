pub mod history;
pub mod rng;
pub mod session;
