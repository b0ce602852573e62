//! Remote company-write delegate and the hybrid repository built on it.
//!
//! `HttpCompanyWriter` owns transport details only: request
//! serialisation, the hard timeout, HTTP status mapping, and JSON
//! decoding into the domain company. `HybridCompanyRepository` splits the
//! company repository contract: writes go through the delegate, reads
//! stay on local storage.

mod dto;
mod http_writer;
mod hybrid;

pub use http_writer::HttpCompanyWriter;
pub use hybrid::HybridCompanyRepository;
