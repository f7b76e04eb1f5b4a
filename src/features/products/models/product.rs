use sqlx::FromRow;

/// Product as stored, joined with its category name on read paths.
///
/// `category_id` is `None` when the product has no category; there is no
/// sentinel id. `category_name` is only filled by the join and is never
/// written back.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: i32,
    pub stock: i32,
    pub category_id: Option<i32>,
    pub category_name: Option<String>,
}

/// Product values supplied for creation, before the store assigns an id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub price: i32,
    pub stock: i32,
    pub category_id: Option<i32>,
}

impl ProductDraft {
    /// Attach the store-assigned id. The category name stays empty until re-read.
    pub fn into_product(self, id: i32) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            stock: self.stock,
            category_id: self.category_id,
            category_name: None,
        }
    }
}

impl Product {
    /// Drop a joined category name that has no category id behind it
    pub fn normalized(mut self) -> Self {
        if self.category_id.is_none() {
            self.category_name = None;
        }
        self
    }
}
