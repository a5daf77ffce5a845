//! `vendora-orders` — committed order records consumed by the engine.

pub mod order;

pub use order::{LineItem, Order, OrderStatus, ShippingRegion};
