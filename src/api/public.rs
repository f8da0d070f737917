//! Public API types

// Re-export public types from each route

pub mod health {
    pub use crate::api::routes::health::public::*;
}

pub mod mailbox {
    pub use crate::api::routes::mailbox::public::*;
}
