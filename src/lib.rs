mod allowed_headers;
mod allowed_methods;
pub mod constants;
mod context;
mod cors;
mod header_builder;
mod headers;
pub mod http;
mod logging;
mod options;
mod origin;
mod response;
mod result;
mod util;

pub use allowed_headers::AllowedHeaders;
pub use allowed_methods::AllowedMethods;
pub use context::{RequestContext, RequestHeaders, RequestKind, classify};
pub use cors::Cors;
pub use headers::{Header, HeaderList};
pub use logging::{CorsEvent, CorsLogger, TracingLogger};
pub use options::{CorsOptions, ValidationError};
pub use origin::{AllowedOrigins, OriginPredicateFn, resolve_origin};
pub use response::{MemoryResponse, ResponseSink};
pub use result::{CorsDecision, RejectReason, Verdict};
pub use util::{equals_ignore_case, normalize_lower};
