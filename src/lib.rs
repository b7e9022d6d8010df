//! # NEO Rust Data Model
//!
//! Near-Earth object and close-approach modeling over NASA's datasets.
//!
//! This crate provides the core data model for NEO exploration tooling:
//! tolerant construction of entities from messy source records,
//! normalization of partially-missing fields, two-phase linking between
//! the object and approach collections, and stable row types for CSV/JSON
//! export.
//!
//! ## Features
//!
//! - **Tolerant Records**: partial source rows build entities; unknown
//!   source columns are dropped at the serde boundary
//! - **Normalization**: blank designations, missing names, unknown
//!   diameters, and absent timestamps all have defined defaults
//! - **Linking**: an arena database resolves each approach's designation
//!   to a live handle and keeps both sides of the link consistent
//! - **Export**: flat serialization rows with a stable key set
//!
//! ## Architecture
//!
//! The crate is organized into three logical modules:
//!
//! - [`api`]: entity types, id handles, and export rows
//! - [`models`]: source records, normalization, and time helpers
//! - [`db`]: the in-memory assembly database
//!
//! Loading the source files, querying the linked dataset, and writing the
//! export rows out belong to external collaborators; the record structs
//! and rows defined here are the contract they consume.

pub mod api;

pub mod db;
pub mod models;
