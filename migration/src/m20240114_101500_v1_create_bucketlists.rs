use sea_orm_migration::prelude::*;

use crate::m20230902_024725_v1_create_users::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .if_not_exists()
                    .table(Bucketlist::Table)
                    .col(
                        ColumnDef::new(Bucketlist::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Bucketlist::Name).string().not_null())
                    .col(ColumnDef::new(Bucketlist::CreatedBy).uuid().not_null())
                    .col(ColumnDef::new(Bucketlist::DateCreated).timestamp().not_null())
                    .col(ColumnDef::new(Bucketlist::DateModified).timestamp().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bucketlists_created_by")
                            .from(Bucketlist::Table, Bucketlist::CreatedBy)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .take(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .table(Bucketlist::Table)
                    .col(Bucketlist::CreatedBy)
                    .name("idx_bucketlists_created_by")
                    .take(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().if_exists().table(Bucketlist::Table).take())
            .await
    }
}

#[derive(DeriveIden)]
enum Bucketlist {
    #[sea_orm(iden = "bucketlists")]
    Table,
    Id,
    Name,
    CreatedBy,
    DateCreated,
    DateModified,
}
