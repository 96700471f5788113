pub mod a001_client;
pub mod a002_product;
pub mod a003_product_daily;
pub mod a004_order;
pub mod a005_invoice;
pub mod a006_shift_manager;
pub mod common;
