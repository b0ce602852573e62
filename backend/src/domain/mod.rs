//! Domain entities, application services, and the hexagonal ports.
//!
//! Types here are transport agnostic: inbound adapters map them to HTTP
//! payloads and outbound adapters map them to rows or wire formats. Keep
//! entities immutable after construction and document invariants on each
//! type.

pub mod company;
pub mod company_service;
pub mod error;
pub mod ports;
pub mod transfer;
pub mod transfer_service;
pub mod window;

pub use self::company::{Company, CompanyDraft, CompanyName, CompanyType, CompanyValidationError};
pub use self::company_service::CompanyService;
pub use self::error::{DomainError, ErrorCode};
pub use self::transfer::{NewTransfer, Transfer, TransferDraft};
pub use self::transfer_service::TransferService;
pub use self::window::ReportingWindow;
