pub mod app;
pub mod backend;
pub mod cli;
pub mod config;
pub mod models;
pub mod registry;
pub mod session;
pub mod storage;
