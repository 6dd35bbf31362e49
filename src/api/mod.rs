//! HTTP handlers for album-manager

pub mod albums;
pub mod buildinfo;
pub mod health;
pub mod pages;
pub mod ui;

pub use albums::{
    album_list, create_form, create_handle, delete_form, delete_handle, home, update_form,
    update_handle,
};
pub use buildinfo::get_build_info;
pub use health::health_routes;
pub use ui::serve_stylesheet;
