//! Shared model and state machine for the site's browser front end.
//!
//! Nothing in this crate touches the DOM or the network: the `frontend` crate
//! performs the I/O and feeds the results into the transitions defined here.

pub mod config;
pub mod console;
pub mod forms;
pub mod model;
pub mod requests;
pub mod routes;
