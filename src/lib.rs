//! `mailforge` — compose email messages and pick export pipelines.
//!
//! This crate provides the core library for building [`message::Message`]
//! values through a fluent [`builder::MessageBuilder`], and for selecting a
//! quality-matched pair of audio/video exporters through the
//! [`export::factory::ExporterFactory`] family.

pub mod builder;
pub mod config;
pub mod error;
pub mod export;
pub mod message;
