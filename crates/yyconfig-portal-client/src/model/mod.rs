// Model types for portal API requests and responses

pub mod app;
pub mod common;
pub mod instance;
pub mod item;
pub mod namespace;
pub mod release;

pub use app::{App, AppRef, AppSearchQuery, Department};
pub use common::{ApiResponse, Page, PageQuery, ResultCode, decode_data};
pub use instance::{Instance, InstanceConfig, InstanceReleaseQuery};
pub use item::{
    CommitFindQuery, Item, ItemChangeSet, ModifyItemsByTextsReq, NamespaceIdentifier,
    NamespaceSyncModel,
};
pub use namespace::{
    AppNamespaceModel, NamespaceEnvTree, NamespaceListReq, NamespaceListResp, NamespaceVisibility,
};
pub use release::{CreateReleaseReq, Release, ReleaseCompareQuery};
