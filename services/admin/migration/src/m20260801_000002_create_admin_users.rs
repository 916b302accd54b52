use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AdminUsers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AdminUsers::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AdminUsers::Email).string().not_null())
                    .col(ColumnDef::new(AdminUsers::Name).string().not_null())
                    .col(
                        ColumnDef::new(AdminUsers::OrganizationId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AdminUsers::Role).string().not_null())
                    .col(ColumnDef::new(AdminUsers::Status).string().not_null())
                    .col(ColumnDef::new(AdminUsers::InvitedBy).uuid())
                    .col(ColumnDef::new(AdminUsers::InviteToken).string())
                    .col(ColumnDef::new(AdminUsers::InviteExpiresAt).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(AdminUsers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AdminUsers::ActivatedAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(AdminUsers::LastActive).timestamp_with_time_zone())
                    .col(ColumnDef::new(AdminUsers::DisabledAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(AdminUsers::DisabledBy).uuid())
                    .foreign_key(
                        ForeignKey::create()
                            .from(AdminUsers::Table, AdminUsers::OrganizationId)
                            .to(Organizations::Table, Organizations::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Lookup path for invite/OTP flows: (organization_id, email).
        // Not unique — re-invite overwrites in place and disabled rows are
        // retained, so uniqueness of the live row is enforced by the service.
        manager
            .create_index(
                Index::create()
                    .table(AdminUsers::Table)
                    .col(AdminUsers::OrganizationId)
                    .col(AdminUsers::Email)
                    .name("idx_admin_users_org_email")
                    .to_owned(),
            )
            .await?;

        // Accept-invite looks up by token.
        manager
            .create_index(
                Index::create()
                    .table(AdminUsers::Table)
                    .col(AdminUsers::InviteToken)
                    .name("idx_admin_users_invite_token")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AdminUsers::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum AdminUsers {
    Table,
    Id,
    Email,
    Name,
    OrganizationId,
    Role,
    Status,
    InvitedBy,
    InviteToken,
    InviteExpiresAt,
    CreatedAt,
    ActivatedAt,
    LastActive,
    DisabledAt,
    DisabledBy,
}

#[derive(Iden)]
enum Organizations {
    Table,
    Id,
}
