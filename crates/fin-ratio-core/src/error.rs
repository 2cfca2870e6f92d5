use thiserror::Error;

#[derive(Debug, Error)]
pub enum RatioError {
    #[error("Division by zero in {context}")]
    DivisionByZero { context: String },

    #[error("Arithmetic overflow in {context}")]
    Overflow { context: String },
}
