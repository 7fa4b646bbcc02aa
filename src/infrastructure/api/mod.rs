//! Dad Jokes REST API client.

mod client;
mod dto;

pub use client::DadJokesClient;
