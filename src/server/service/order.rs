//! Checkout: order placement, OTP confirmation and admin order management.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        catalog::{CatalogStatus, ItemKind},
        order::OrderStatus,
    },
    server::{
        data::{order::OrderRepository, user::UserRepository},
        error::{otp::OtpError, AppError},
        model::{
            catalog::OrderableItem,
            notification::{CreateNotificationParams, Recipient},
            order::{CreateOrderParams, Order, PaginatedOrders, PlaceOrderParams},
            user::User,
        },
        realtime::NotificationHub,
        service::{
            fitness_class::FitnessClassService, mail::Mailer, membership::MembershipService,
            notification::NotificationService, otp::OtpService, program::ProgramService,
        },
        util::parse::{page_size, total_pages},
    },
};

pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
    mailer: &'a Mailer,
    hub: Option<&'a NotificationHub>,
}

impl<'a> OrderService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        mailer: &'a Mailer,
        hub: Option<&'a NotificationHub>,
    ) -> Self {
        Self { db, mailer, hub }
    }

    /// Places a pending order and emails the user a verification code.
    ///
    /// Name and price are copied from the catalog item. If a code was sent to the
    /// user less than a cooldown ago, that code stays valid and no new one is sent.
    ///
    /// # Returns
    /// - `Ok(Order)` - The pending order
    /// - `Err(AppError::NotFound)` - No such item
    /// - `Err(AppError::BadRequest)` - Item exists but is inactive
    pub async fn create(&self, params: PlaceOrderParams) -> Result<Order, AppError> {
        let user = self.get_user(params.user_id).await?;
        let item = self.resolve_item(params.item_kind, params.item_id).await?;

        let order = OrderRepository::new(self.db)
            .create(CreateOrderParams {
                user_id: user.id,
                item_kind: item.kind,
                item_id: item.id,
                item_name: item.name,
                amount: item.price,
            })
            .await?;
        let order = Order::from_entity(order)?;

        tracing::info!(
            "User {} placed order {} for {} {}",
            user.id,
            order.id,
            order.item_kind,
            order.item_id
        );

        match self.send_code(&user).await {
            Ok(()) => {}
            Err(AppError::OtpErr(OtpError::CooldownActive { .. })) => {
                tracing::debug!("Reusing recent OTP for {} on order {}", user.email, order.id);
            }
            Err(e) => {
                tracing::error!("Failed to send OTP for order {}: {}", order.id, e);
            }
        }

        Ok(order)
    }

    /// Confirms a pending order with the code emailed to its owner.
    ///
    /// On success the user gets an "Order confirmed" notification and every admin
    /// a "New order" notification. Notification failures are logged, not returned,
    /// since the order is already confirmed by then.
    ///
    /// # Returns
    /// - `Ok(Order)` - The confirmed order
    /// - `Err(AppError::NotFound)` - No such order for this user
    /// - `Err(AppError::BadRequest)` - Order is not pending
    /// - `Err(AppError::OtpErr(_))` - Code rejected
    pub async fn verify(&self, user_id: i32, order_id: i32, code: &str) -> Result<Order, AppError> {
        let repo = OrderRepository::new(self.db);
        let order = self.get_owned(user_id, order_id).await?;

        if order.status != OrderStatus::Pending {
            return Err(AppError::BadRequest(format!(
                "Order {} is {}, not pending",
                order.id, order.status
            )));
        }

        let user = self.get_user(user_id).await?;
        OtpService::new(self.db).verify(&user.email, code).await?;

        if !repo.confirm_pending(order.id, Utc::now()).await? {
            return Err(AppError::BadRequest(format!(
                "Order {} is no longer pending",
                order.id
            )));
        }

        let order = repo
            .get_by_id(order.id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Order {} not found", order_id)))?;
        let order = Order::from_entity(order)?;

        tracing::info!("Order {} confirmed by user {}", order.id, user.id);

        self.announce_confirmation(&user, &order).await;

        Ok(order)
    }

    /// Sends a new verification code for a pending order.
    ///
    /// # Returns
    /// - `Err(AppError::OtpErr(CooldownActive))` - Previous code is too recent
    /// - `Err(AppError::BadRequest)` - Order is not pending
    pub async fn resend_otp(&self, user_id: i32, order_id: i32) -> Result<(), AppError> {
        let order = self.get_owned(user_id, order_id).await?;

        if order.status != OrderStatus::Pending {
            return Err(AppError::BadRequest(format!(
                "Order {} is {}, not pending",
                order.id, order.status
            )));
        }

        let user = self.get_user(user_id).await?;
        self.send_code(&user).await
    }

    /// Gets a page of the user's orders, newest first.
    pub async fn get_paginated_for_user(
        &self,
        user_id: i32,
        page: u64,
        entries: u64,
    ) -> Result<PaginatedOrders, AppError> {
        let per_page = page_size(entries);

        let (orders, total) = OrderRepository::new(self.db)
            .get_paginated_by_user(user_id, page, per_page)
            .await?;

        Self::paginated(orders, total, page, per_page)
    }

    /// Gets a page of all orders, newest first, optionally filtered by status.
    pub async fn get_paginated(
        &self,
        status: Option<OrderStatus>,
        page: u64,
        entries: u64,
    ) -> Result<PaginatedOrders, AppError> {
        let per_page = page_size(entries);

        let (orders, total) = OrderRepository::new(self.db)
            .get_paginated(status, page, per_page)
            .await?;

        Self::paginated(orders, total, page, per_page)
    }

    /// Admin status override.
    ///
    /// Setting `confirmed` keeps an existing confirmation time or stamps now;
    /// any other status clears it, taking the order out of revenue.
    /// Returns None if the order doesn't exist.
    pub async fn update_status(
        &self,
        id: i32,
        status: OrderStatus,
    ) -> Result<Option<Order>, AppError> {
        let repo = OrderRepository::new(self.db);

        let Some(existing) = repo.get_by_id(id).await? else {
            return Ok(None);
        };

        let confirmed_at = match status {
            OrderStatus::Confirmed => Some(existing.confirmed_at.unwrap_or_else(Utc::now)),
            OrderStatus::Pending | OrderStatus::Cancelled => None,
        };

        let order = repo.update_status(id, status, confirmed_at).await?;

        tracing::info!("Order {} set to {}", id, status);

        order.map(Order::from_entity).transpose()
    }

    async fn get_user(&self, user_id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))
    }

    /// Loads an order that belongs to `user_id`; someone else's order is reported as missing.
    async fn get_owned(&self, user_id: i32, order_id: i32) -> Result<Order, AppError> {
        let order = OrderRepository::new(self.db)
            .get_by_id(order_id)
            .await?
            .filter(|order| order.user_id == user_id)
            .ok_or_else(|| AppError::NotFound(format!("Order {} not found", order_id)))?;

        Order::from_entity(order)
    }

    async fn resolve_item(&self, kind: ItemKind, id: i32) -> Result<OrderableItem, AppError> {
        let item = match kind {
            ItemKind::Class => FitnessClassService::new(self.db)
                .get_by_id(id, false)
                .await?
                .map(|class| class.into_orderable()),
            ItemKind::Program => ProgramService::new(self.db)
                .get_by_id(id, false)
                .await?
                .map(|program| program.into_orderable()),
            ItemKind::Membership => MembershipService::new(self.db)
                .get_by_id(id, false)
                .await?
                .map(|membership| membership.into_orderable()),
        };

        let Some(item) = item else {
            return Err(AppError::NotFound(format!("{} {} not found", kind, id)));
        };

        if item.status != CatalogStatus::Active {
            return Err(AppError::BadRequest(format!(
                "{} {} is not available",
                kind, id
            )));
        }

        Ok(item)
    }

    async fn send_code(&self, user: &User) -> Result<(), AppError> {
        OtpService::new(self.db)
            .issue(&user.email, self.mailer)
            .await
    }

    async fn announce_confirmation(&self, user: &User, order: &Order) {
        let notifications = NotificationService::new(self.db, self.hub);

        let to_user = CreateNotificationParams::new(
            Recipient::User(user.id),
            "Order confirmed",
            format!("Your order for {} has been confirmed.", order.item_name),
        )
        .with_type("success")
        .with_icon("check");

        if let Err(e) = notifications.dispatch(to_user).await {
            tracing::error!("Failed to notify user {} of order {}: {}", user.id, order.id, e);
        }

        let message = format!(
            "{} ordered {} ({} {}).",
            user.name, order.item_name, order.item_kind, order.item_id
        );

        if let Err(e) = notifications
            .notify_all_admins("New order", &message, Some("info"), Some("cart"))
            .await
        {
            tracing::error!("Failed to notify admins of order {}: {}", order.id, e);
        }
    }

    fn paginated(
        orders: Vec<entity::order::Model>,
        total: u64,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedOrders, AppError> {
        let orders: Result<Vec<_>, _> = orders.into_iter().map(Order::from_entity).collect();

        Ok(PaginatedOrders {
            orders: orders?,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }
}
