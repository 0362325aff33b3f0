#[macro_export]
macro_rules! internal_error_message {
    () => {
        format!("Internal error at {}:{}.", file!(), line!())
    };
    ($($arg:tt)+) => {
        format!("Internal error at {}:{}: {}.", file!(), line!(), format!($($arg)*))
    };
}


#[derive(Clone, PartialEq, Eq, Debug)]
pub enum EventError {
    // The server could not list legal moves for the selected square.
    LegalMovesRejected { square: String, error: String },
    // The server replied to a legal moves query with neither moves nor an error.
    LegalMovesMissing { square: String },
}
