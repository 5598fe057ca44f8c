//! sea-orm table mappings.

pub mod employees;
