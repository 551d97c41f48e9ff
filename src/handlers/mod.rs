pub mod common;
pub mod graphql;
