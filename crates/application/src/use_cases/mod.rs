mod answer_query;
mod relay_query;
mod resolve_hostname;

pub use answer_query::AnswerQueryUseCase;
pub use relay_query::RelayQueryUseCase;
pub use resolve_hostname::{Resolution, ResolveHostnameUseCase};
