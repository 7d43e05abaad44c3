use sea_orm::DatabaseConnection;

use crate::{
    model::catalog::CatalogStatus,
    server::{
        data::membership::MembershipRepository,
        error::AppError,
        model::membership::{Membership, MembershipParams, PaginatedMemberships},
        util::parse::{page_size, total_pages},
    },
};

pub struct MembershipService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MembershipService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: MembershipParams) -> Result<Membership, AppError> {
        params.validate()?;

        let membership = MembershipRepository::new(self.db).create(params).await?;

        Membership::from_entity(membership)
    }

    pub async fn update(
        &self,
        id: i32,
        params: MembershipParams,
    ) -> Result<Option<Membership>, AppError> {
        params.validate()?;

        MembershipRepository::new(self.db)
            .update(id, params)
            .await?
            .map(Membership::from_entity)
            .transpose()
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(MembershipRepository::new(self.db).delete(id).await?)
    }

    pub async fn get_by_id(
        &self,
        id: i32,
        active_only: bool,
    ) -> Result<Option<Membership>, AppError> {
        let Some(membership) = MembershipRepository::new(self.db).get_by_id(id).await? else {
            return Ok(None);
        };

        let membership = Membership::from_entity(membership)?;
        if active_only && membership.status != CatalogStatus::Active {
            return Ok(None);
        }

        Ok(Some(membership))
    }

    /// Gets a page of memberships, cheapest first.
    pub async fn get_paginated(
        &self,
        active_only: bool,
        page: u64,
        entries: u64,
    ) -> Result<PaginatedMemberships, AppError> {
        let per_page = page_size(entries);
        let status = active_only.then_some(CatalogStatus::Active);

        let (memberships, total) = MembershipRepository::new(self.db)
            .get_paginated(status, page, per_page)
            .await?;

        let memberships: Result<Vec<_>, _> = memberships
            .into_iter()
            .map(Membership::from_entity)
            .collect();

        Ok(PaginatedMemberships {
            memberships: memberships?,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }
}
