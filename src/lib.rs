//! LeadShift Ingest API Library
//!
//! Core functionality for the LeadShift lead ingestion service: parsing
//! uploaded CSVs of company contacts, normalizing heterogeneous columns onto
//! the canonical lead schema, persisting the collection as a single JSON
//! document, and exposing it over HTTP.
//!
//! # Modules
//!
//! - `config`: Configuration management.
//! - `errors`: Error handling types.
//! - `handlers`: HTTP request handlers.
//! - `ingest`: CSV ingestion pipeline.
//! - `models`: Core data models.
//! - `normalizer`: Row-to-lead schema normalization.
//! - `storage`: JSON document lead store.

pub mod config;
pub mod errors;
pub mod handlers;
pub mod ingest;
pub mod models;
pub mod normalizer;
pub mod storage;
