//! Mobile-facing bindings for daytimer core.

pub mod api;
