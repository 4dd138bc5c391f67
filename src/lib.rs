#![allow(dead_code)]

pub mod api;
pub mod config;
pub mod core;
