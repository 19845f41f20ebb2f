#![allow(clippy::single_call_fn, reason = "HTTP handlers are called once from router")]

pub mod fertilization;
pub mod fluxes;
pub mod sites;
pub mod tillage;
pub mod treatments;
