mod health;
mod resources;
mod static_files;

pub use health::health;
pub use resources::{
    create_resource, delete_resource, list_resources, read_resource, stat_resource,
    upsert_resource,
};
pub use static_files::{serve_index, serve_static};
