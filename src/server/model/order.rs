//! Order domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::{
        catalog::ItemKind,
        order::{CreateOrderDto, OrderDto, OrderStatus, PaginatedOrdersDto},
    },
    server::{error::AppError, util::parse::parse_stored},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i32,
    pub user_id: i32,
    pub item_kind: ItemKind,
    pub item_id: i32,
    pub item_name: String,
    pub amount: i64,
    pub status: OrderStatus,
    pub confirmed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// # Returns
    /// - `Err(AppError::InternalErr(ParseStoredValue))` - Unknown stored item kind or status
    pub fn from_entity(entity: entity::order::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            item_kind: parse_stored("order.item_kind", &entity.item_kind)?,
            item_id: entity.item_id,
            item_name: entity.item_name,
            amount: entity.amount,
            status: parse_stored("order.status", &entity.status)?,
            confirmed_at: entity.confirmed_at,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> OrderDto {
        OrderDto {
            id: self.id,
            user_id: self.user_id,
            item_kind: self.item_kind,
            item_id: self.item_id,
            item_name: self.item_name,
            amount: self.amount,
            status: self.status,
            confirmed_at: self.confirmed_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// A user's request to buy a catalog item.
#[derive(Debug, Clone)]
pub struct PlaceOrderParams {
    pub user_id: i32,
    pub item_kind: ItemKind,
    pub item_id: i32,
}

impl PlaceOrderParams {
    pub fn from_dto(user_id: i32, dto: CreateOrderDto) -> Self {
        Self {
            user_id,
            item_kind: dto.item_kind,
            item_id: dto.item_id,
        }
    }
}

/// Pending order row with the item snapshot already resolved.
#[derive(Debug, Clone)]
pub struct CreateOrderParams {
    pub user_id: i32,
    pub item_kind: ItemKind,
    pub item_id: i32,
    pub item_name: String,
    pub amount: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedOrders {
    pub orders: Vec<Order>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedOrders {
    pub fn into_dto(self) -> PaginatedOrdersDto {
        PaginatedOrdersDto {
            orders: self.orders.into_iter().map(Order::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
