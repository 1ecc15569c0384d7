pub mod alert;
pub mod api;
pub mod nav;
