//! # Shared Constants
//!
//! Fixed values of the catalog document shape and the default database
//! coordinates the loader writes to.

use mongodb::bson::oid::ObjectId;

/// The database the catalog is loaded into unless overridden.
pub const DEFAULT_DATABASE: &str = "inv_mgmt_manufacturing";

/// The collection holding one document per product.
pub const DEFAULT_COLLECTION: &str = "products";

/// Prepended to the product name to build its description.
pub const DESCRIPTION_PREFIX: &str = "High quality ";

/// The id of the single factory every item is stocked at.
/// Hex form: `65c63cb61526ffd3415fadbd`.
pub const FACTORY_LOCATION_ID: ObjectId = ObjectId::from_bytes([
    0x65, 0xc6, 0x3c, 0xb6, 0x15, 0x26, 0xff, 0xd3, 0x41, 0x5f, 0xad, 0xbd,
]);

/// Delivery time assigned to every item.
pub const DELIVERY_TIME_AMOUNT: i64 = 3;
pub const DELIVERY_TIME_UNIT: &str = "seconds";

/// Warehouse stock is this multiple of the sheet quantity.
pub const WAREHOUSE_MULTIPLIER: i64 = 10;

/// Columns every catalog sheet must provide.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "name", "category", "code", "unit", "sku", "variant", "quantity",
];
