use thiserror::Error;

use crate::model::{UnknownProcedure, UnknownSection};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Section(#[from] UnknownSection),
    #[error(transparent)]
    Procedure(#[from] UnknownProcedure),
}
