//! TOPSIS Ranker - Multi-criteria ranking with auditable calculation steps
//!
//! This crate ranks alternatives against weighted benefit and cost criteria
//! using TOPSIS (closeness to an ideal solution). The engine is pure; the
//! application layer adds policy checks and logging, and adapters read
//! problem files and export results and step tables.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
