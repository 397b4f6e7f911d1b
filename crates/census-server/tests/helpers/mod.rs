//! Test helpers para census-server.

#![allow(dead_code, unused_imports)]

pub mod client;
pub mod mock;

pub use client::{TestClient, TestResponse, client_for};
pub use mock::{MockSource, Reply};
