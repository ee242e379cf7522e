//! Business logic layer.
//!
//! Contains all the core functionality for managing customers, certificates,
//! surls, and their accession log.

mod accessions;
mod certificates;
mod customers;
mod helpers;
mod surls;

pub use accessions::*;
pub use certificates::*;
pub use customers::*;
pub use surls::*;
