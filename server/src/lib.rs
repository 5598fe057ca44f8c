//! Employee service: HTTP surface, configuration and fixture seeding.

pub mod config;
pub mod employees;
pub mod http;
pub mod seed;

#[cfg(test)]
pub(crate) mod test_support;
