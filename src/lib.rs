// Library root module for prime-service
// This file defines the public API and module structure for the prime-service library
// The binary in main.rs only loads configuration and serves `router::create_api_router`
//
// Numan Thabit 2025 Nov

pub mod config;
pub mod errors;
pub mod metrics;
pub mod prime;
pub mod router;
pub mod service;
pub mod state;
