mod check;
mod fmt;
mod input;
mod tokens;
mod tree;

pub use check::CheckArgs;
pub use fmt::FmtArgs;
pub use input::InputArgs;
pub use tokens::TokensArgs;
pub use tree::TreeArgs;
