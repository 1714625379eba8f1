//! Entity Module

pub mod subject;
