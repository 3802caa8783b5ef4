//! Table creation
//!
//! Creates the `cars`, `customers` and `leases` tables from the SeaORM
//! entities when they are missing. Existing tables are left as they are.

use sea_orm::{ConnectionTrait, DatabaseConnection, Schema};

use crate::entity::{cars, customers, leases};
use crate::error::DomainError;

/// Create any missing tables; leases last since they reference the other two
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DomainError> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut statements = [
        schema.create_table_from_entity(cars::Entity),
        schema.create_table_from_entity(customers::Entity),
        schema.create_table_from_entity(leases::Entity),
    ];

    for statement in statements.iter_mut() {
        statement.if_not_exists();
        db.execute(backend.build(&*statement))
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;
    }

    tracing::info!("Database schema ready");
    Ok(())
}
