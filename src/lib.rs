mod models;

pub use crate::models::*;
