use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IllegalMove {
    #[error("position ({row}, {col}) is outside the 3x3 board")]
    OutOfBounds { row: usize, col: usize },

    #[error("cell ({row}, {col}) is already marked")]
    Occupied { row: usize, col: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("the round is already over")]
    GameOver,

    #[error("it is the computer's turn")]
    NotHumanTurn,

    #[error(transparent)]
    IllegalMove(#[from] IllegalMove),
}
