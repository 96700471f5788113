//! Tab management
//!
//! - `page` - wrapper showing one tab's content while it is active
//! - `registry` - tab key to screen mapping
//! - `tab_labels` - tab titles

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::tab_label_for_key;
