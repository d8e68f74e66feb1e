//! DevEvent: developer event listings over a small JSON API and a
//! server-rendered home page.

pub mod config;
pub mod db;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod state;
pub mod utils;
pub mod views;
