use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::products::repo::Product;

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category_id: Option<Uuid>,
}

/// Partial update. Required columns (`name`, `price`) use a plain Option:
/// absent or null keeps the stored value, any supplied value is applied,
/// including "" and 0. Nullable columns (`description`, `category_id`)
/// distinguish "absent" (outer None, keep) from an explicit null
/// (Some(None), clear).
#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    #[serde(default, deserialize_with = "patch_field")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch_field")]
    pub category_id: Option<Option<Uuid>>,
}

/// Wraps a present field in Some so an explicit null survives deserialization.
fn patch_field<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub message: &'static str,
    pub product: Product,
}

#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    pub message: &'static str,
    pub products: Vec<Product>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_mean_keep() {
        let req: UpdateProductRequest = serde_json::from_str("{}").expect("deserialize");
        assert!(req.name.is_none());
        assert!(req.price.is_none());
        assert!(req.description.is_none());
        assert!(req.category_id.is_none());
    }

    #[test]
    fn explicit_null_description_means_clear() {
        let req: UpdateProductRequest =
            serde_json::from_str(r#"{"description": null}"#).expect("deserialize");
        assert_eq!(req.description, Some(None));
    }

    #[test]
    fn zero_price_is_applied_not_skipped() {
        let req: UpdateProductRequest =
            serde_json::from_str(r#"{"price": 0}"#).expect("deserialize");
        assert_eq!(req.price, Some(Decimal::ZERO));
    }

    #[test]
    fn supplied_category_id_round_trips() {
        let id = Uuid::new_v4();
        let req: UpdateProductRequest =
            serde_json::from_str(&format!(r#"{{"category_id": "{id}"}}"#)).expect("deserialize");
        assert_eq!(req.category_id, Some(Some(id)));
    }

    #[test]
    fn create_request_accepts_decimal_price() {
        let req: CreateProductRequest = serde_json::from_str(
            r#"{"name": "Laptop", "price": 1500.00, "category_id": null}"#,
        )
        .expect("deserialize");
        assert_eq!(req.price.to_string(), "1500");
        assert!(req.category_id.is_none());
    }
}
