pub mod charts;
pub mod config;
pub mod data;
pub mod sheets;
pub mod web;
