pub mod api;
pub mod carriers;
pub mod custom_data;
pub mod models;
pub mod regions;
pub mod resolver;
pub mod user_data;
