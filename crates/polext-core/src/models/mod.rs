//! Data models for policy extraction.

pub mod config;
pub mod policy;
