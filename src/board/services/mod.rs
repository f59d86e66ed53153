//! Orchestration services for the board context.

mod board;

pub use board::{
    BoardService, BoardServiceError, BoardServiceResult, CreateCommentRequest, CreateTaskRequest,
    UpdateTaskRequest,
};
