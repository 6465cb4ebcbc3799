//! Rail vehicle model.
//!
//! Trains made of wagons, moving along fixed routes of stations. A train
//! tracks its speed, its coupled wagons and its position on the route,
//! and every station knows which trains are standing at it.

pub mod config;
pub mod domain;
pub mod network;
pub mod train;
pub mod wagon;
