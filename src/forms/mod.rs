mod register;

pub use register::{AuthTokens, Register, RegisterPayload, RegisterResponse, User};
