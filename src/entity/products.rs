use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub shop_id: i64,
    pub name: String,
    pub description: String,
    pub thumbnail_url: String,
    pub origin_price: i64,
    pub discounted_price: i64,
    pub discounted_rate: f64,
    pub status: String,
    pub in_stock: bool,
    pub is_preorder: bool,
    pub is_purchasable: bool,
    pub delivery_condition: String,
    pub delivery_display: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
