use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "cars")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub car_brand: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    /// Unconstrained NUMERIC, stored at the scale it was given
    #[sea_orm(column_type = "Decimal(None)")]
    pub daily_price: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::leases::Entity")]
    Leases,
}

impl Related<super::leases::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Leases.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
