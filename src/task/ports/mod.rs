//! Port contracts for the task module.
//!
//! Ports define infrastructure-agnostic interfaces: the input gateway
//! consumed by the transport layer and the repository contract consumed
//! by the use case.

pub mod input;
pub mod repository;

pub use input::{
    CreateTaskRequest, TaskInputError, TaskInputGateway, TaskInputResult, UpdateTaskRequest,
};
pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
