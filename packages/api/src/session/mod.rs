//! Session facade over the query engine
//!
//! Construction through [`SessionBuilder`], queries through
//! [`Session`], enumeration sugar through [`ListIter`].

pub mod core;
pub mod iter;

pub use core::{Session, SessionBuilder};
pub use iter::ListIter;
