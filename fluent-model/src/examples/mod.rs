//! Example models built on the derive.

pub mod tweet;
