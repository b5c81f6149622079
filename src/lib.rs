//! Locsmith - string extraction and machine translation for Vue i18n projects
//!
//! Locsmith is a CLI tool and library that harvests user-facing strings from
//! Vue single-file component templates and existing base-locale message
//! catalogs, then translates them through a chat-completion API and writes
//! one message catalog per target language.
//!
//! ## Module Structure
//!
//! - `catalog`: Catalog data model and JSON artifacts
//! - `cli`: Command-line interface layer
//! - `config`: Extractor configuration file loading and parsing
//! - `error`: Library error type
//! - `extract`: Extraction phase (classifier, template scanner, catalog flattening)
//! - `translate`: Translation phase (batching, completion client, locale writer)
//! - `utils`: Shared utility functions

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod translate;
pub mod utils;
