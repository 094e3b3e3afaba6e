pub mod config;
pub mod consts;
pub mod controller;
pub mod error;
pub mod geometry;
pub mod host;
pub mod image;
pub mod presentation;
pub mod replay;
