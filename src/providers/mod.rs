//! Outbound calls to the generative provider
//!
//! Three narrow operations ride the same transport: the consumption data
//! fetch, the route/distance estimate, and the free-text recommendation.
//! Each takes a request record and returns a typed result or an error;
//! nothing here leaks into the pure calculator core.

pub mod consumption;
pub mod distance;
pub mod gemini;
pub mod narrator;
