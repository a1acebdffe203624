pub mod model;
pub mod catalog;
pub mod dto;
pub mod config;
pub mod util;
pub mod service;
pub mod handler;
pub mod router;
pub mod app;
