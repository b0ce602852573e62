//! Domain ports for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod company_command;
mod company_query;
mod company_repository;
mod company_writer;
mod transfer_command;
mod transfer_query;
mod transfer_repository;

#[cfg(test)]
pub use company_command::MockCompanyCommand;
pub use company_command::{CompanyCommand, FixtureCompanyCommand};
#[cfg(test)]
pub use company_query::MockCompanyQuery;
pub use company_query::{CompanyQuery, FixtureCompanyQuery};
#[cfg(test)]
pub use company_repository::MockCompanyRepository;
pub use company_repository::{
    CompanyRepository, CompanyRepositoryError, FixtureCompanyRepository,
};
#[cfg(test)]
pub use company_writer::MockCompanyWriter;
pub use company_writer::{CompanyWriter, CompanyWriterError};
#[cfg(test)]
pub use transfer_command::MockTransferCommand;
pub use transfer_command::{FixtureTransferCommand, TransferCommand};
#[cfg(test)]
pub use transfer_query::MockTransferQuery;
pub use transfer_query::{FixtureTransferQuery, TransferQuery};
#[cfg(test)]
pub use transfer_repository::MockTransferRepository;
pub use transfer_repository::{
    FixtureTransferRepository, TransferRepository, TransferRepositoryError,
};
