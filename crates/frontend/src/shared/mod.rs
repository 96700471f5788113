pub mod api;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod icons;
pub mod list_view_model;
pub mod notify;
