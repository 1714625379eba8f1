//! Value Object Module

pub mod principal;
