/// Item ids are assigned by a single store-wide counter.
pub type ItemId = i64;

/// Logical partition key. Items are only ever visible within their tenant.
pub type TenantId = String;
