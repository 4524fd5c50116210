#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

pub mod client;
pub mod config;
pub mod controls;
pub mod event;
pub mod game_log;
pub mod geometry;
pub mod painter;
pub mod region;
pub mod snapshot;
pub mod view;
