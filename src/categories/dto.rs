use serde::{Deserialize, Serialize};

use crate::categories::repo::Category;

#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
}

/// Partial update. An absent or null name keeps the stored value; any
/// supplied string is applied as-is, including the empty string.
#[derive(Debug, Deserialize)]
pub struct UpdateCategoryRequest {
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub message: &'static str,
    pub category: Category,
}

#[derive(Debug, Serialize)]
pub struct CategoryListResponse {
    pub message: &'static str,
    pub categories: Vec<Category>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_name_is_treated_as_absent() {
        // {"name": null} keeps the stored name rather than clearing it.
        let req: UpdateCategoryRequest =
            serde_json::from_str(r#"{"name": null}"#).expect("deserialize");
        assert!(req.name.is_none());
    }

    #[test]
    fn empty_string_name_is_applied_not_skipped() {
        let req: UpdateCategoryRequest =
            serde_json::from_str(r#"{"name": ""}"#).expect("deserialize");
        assert_eq!(req.name.as_deref(), Some(""));
    }
}
