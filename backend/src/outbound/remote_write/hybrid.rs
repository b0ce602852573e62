//! Split write/read company repository.
//!
//! Writes route through the remote delegate; reads (range query and the
//! existence guard) stay on local storage. Selected once at startup;
//! there is no runtime fallback from remote to local.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::ports::{
    CompanyRepository, CompanyRepositoryError, CompanyWriter, CompanyWriterError,
};
use crate::domain::{Company, CompanyDraft, ReportingWindow};

/// Translate the writer taxonomy into repository terms without losing the
/// response class: rejections stay rejections, outages stay outages.
fn map_writer_error(error: CompanyWriterError) -> CompanyRepositoryError {
    match error {
        CompanyWriterError::Timeout { message }
        | CompanyWriterError::Transport { message }
        | CompanyWriterError::Upstream { message } => {
            CompanyRepositoryError::unavailable(message)
        }
        CompanyWriterError::InvalidInput { message } => CompanyRepositoryError::rejected(message),
        CompanyWriterError::Protocol { message } | CompanyWriterError::Decode { message } => {
            CompanyRepositoryError::query(format!("remote write delegate: {message}"))
        }
    }
}

/// Company repository that delegates writes and keeps reads local.
#[derive(Clone)]
pub struct HybridCompanyRepository<W, R> {
    writer: W,
    reader: R,
}

impl<W, R> HybridCompanyRepository<W, R> {
    /// Compose a remote writer with a local reader.
    pub fn new(writer: W, reader: R) -> Self {
        Self { writer, reader }
    }
}

#[async_trait]
impl<W, R> CompanyRepository for HybridCompanyRepository<W, R>
where
    W: CompanyWriter,
    R: CompanyRepository,
{
    async fn create(&self, draft: &CompanyDraft) -> Result<Company, CompanyRepositoryError> {
        self.writer.create(draft).await.map_err(map_writer_error)
    }

    async fn find_registered_between(
        &self,
        window: &ReportingWindow,
    ) -> Result<Vec<Company>, CompanyRepositoryError> {
        self.reader.find_registered_between(window).await
    }

    async fn exists_by_id(&self, id: &Uuid) -> Result<bool, CompanyRepositoryError> {
        self.reader.exists_by_id(id).await
    }
}
