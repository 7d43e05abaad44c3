//! Admin data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::admin::{Admin, CreateAdminParams};

pub struct AdminRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateAdminParams) -> Result<Admin, DbErr> {
        let now = Utc::now();

        let entity = entity::admin::ActiveModel {
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            password_hash: ActiveValue::Set(params.password_hash),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Admin::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Admin>, DbErr> {
        let entity = entity::prelude::Admin::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Admin::from_entity))
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Admin>, DbErr> {
        let entity = entity::prelude::Admin::find()
            .filter(entity::admin::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(Admin::from_entity))
    }

    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let admin_count = entity::prelude::Admin::find().count(self.db).await?;

        Ok(admin_count > 0)
    }

    /// Ids of every admin, used to fan a notification out to all of them.
    pub async fn get_all_ids(&self) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Admin::find()
            .select_only()
            .column(entity::admin::Column::Id)
            .order_by_asc(entity::admin::Column::Id)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }
}
