pub mod detail;
pub mod error;
pub mod filters;
pub mod joins;
pub mod table;

pub use detail::TableDetail;
pub use error::{MetadataError, MetadataResult};
pub use filters::{AliasMapping, CommonFilter, FilterSegment};
pub use joins::{CommonJoin, JoinRow};
pub use table::{table_url, TableKey, TableRef};
