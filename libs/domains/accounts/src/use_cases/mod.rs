//! One struct per operation. Each borrows its collaborators for a single
//! `execute` call and answers with `Either`: `Left(DomainError)` for an
//! expected failure, `Right(value)` for success. Collaborator failures
//! propagate as `Err`.

pub mod create;
pub mod delete;
pub mod read;
pub mod sign_in;
pub mod update;

use crate::either::Either;
use crate::error::{AccountResult, DomainError};

pub type UseCaseResult<T> = AccountResult<Either<DomainError, T>>;

pub use create::CreateAccountUseCase;
pub use delete::DeleteAccountUseCase;
pub use read::{ReadAccountUseCase, ReadAccountsUseCase};
pub use sign_in::SignInUseCase;
pub use update::UpdateAccountUseCase;
