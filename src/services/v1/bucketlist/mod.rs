pub mod delete;
pub mod paginate;
pub mod show;
pub mod store;
pub mod update;
