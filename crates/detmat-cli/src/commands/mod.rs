pub mod det;
pub mod store;
