use seal_types::{AccountAddress, Amount, OrderId, ProductId};

/// The five canonical fields of an order, in their fixed protocol order.
///
/// The canonical byte encoding must be deterministic across language
/// implementations, so it avoids general-purpose object serialization
/// (whose field order is not guaranteed) in favor of a fixed-field-order,
/// length-prefixed layout:
///
/// ```text
/// len(order_id)   u32 BE | order_id bytes
/// len(product_id) u32 BE | product_id bytes
/// quantity        u32 BE
/// len(amount)     u32 BE | amount bytes (normalized)
/// len(buyer)      u32 BE | buyer bytes (lowercase)
/// ```
///
/// The amount is encoded in normalized form and the buyer address in
/// lowercase, so that values equal under the protocol's comparison rules
/// always produce identical bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CanonicalOrder<'a> {
    pub order_id: &'a OrderId,
    pub product_id: &'a ProductId,
    pub quantity: u32,
    pub amount: &'a Amount,
    pub buyer: &'a AccountAddress,
}

impl CanonicalOrder<'_> {
    /// Serialize to canonical bytes. Total over well-formed input.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut buffer = Vec::new();
        write_string(&mut buffer, self.order_id.as_str());
        write_string(&mut buffer, self.product_id.as_str());
        buffer.extend_from_slice(&self.quantity.to_be_bytes());
        write_string(&mut buffer, self.amount.normalized());
        write_string(&mut buffer, &self.buyer.to_lowercase());
        buffer
    }
}

fn write_string(buffer: &mut Vec<u8>, s: &str) {
    let bytes = s.as_bytes();
    buffer.extend_from_slice(&(bytes.len() as u32).to_be_bytes());
    buffer.extend_from_slice(bytes);
}
