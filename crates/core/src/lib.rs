//! Portal core: client-held token inspection and route guarding

pub mod clock;
pub mod config;
pub mod error;
pub mod guard;
pub mod routes;
pub mod storage;
pub mod store;
pub mod token;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ExpiredTokenPolicy, ExpiryUnit, GuardConfig};
pub use error::{RouteTableError, StorageError, StorageResult, TokenError, TokenResult};
pub use guard::{NavigationDecision, NavigationGuard, REDIRECT_QUERY_PARAM};
pub use routes::{RouteDescriptor, RouteMeta, RouteTable};
pub use storage::{KeyValueStorage, MemoryStorage};
pub use store::TokenStore;
pub use token::{Claims, decode_claims, encode_unsigned};
