use crate::error::IdRequestError;

/// Pool of reusable integer ids.
pub trait IdPool: Send + Sync {
    /// Type of ID in the pool
    type Id;

    /// Request ID from the pool.
    ///
    /// Fails with [`IdRequestError::ExhaustedRange`] if every
    /// id is currently handed out.
    fn request(&self) -> Result<Self::Id, IdRequestError>;

    /// Return ID back to the pool.
    fn return_id(&self, id: Self::Id);
}
