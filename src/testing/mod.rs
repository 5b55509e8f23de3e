pub mod instance;
pub mod setup;
pub mod store;
