//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**: two with the same attributes are equal.
/// Invoice line items, room panoramas and inspection findings are value
/// objects; properties, tenants and invoices are entities.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct LineItem {
///     description: String,
///     unit_price: Decimal,
///     quantity: u32,
/// }
///
/// impl ValueObject for LineItem {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
