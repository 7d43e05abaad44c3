//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Monotonically increasing across all factories so generated emails and names
/// never collide within a test binary.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user together with a confirmed order for an active membership.
///
/// Convenience for revenue and order listing tests that need one paid order
/// without caring about the item.
///
/// # Returns
/// - `Ok((user, membership, order))` - All created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_confirmed_membership_order(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::membership::Model,
        entity::order::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let membership = crate::factory::membership::create_membership(db).await?;
    let order = crate::factory::order::OrderFactory::new(db, user.id)
        .item("membership", membership.id, membership.name.clone())
        .amount(membership.price)
        .confirmed_at(chrono::Utc::now())
        .build()
        .await?;

    Ok((user, membership, order))
}
